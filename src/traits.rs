//! The common interface shared by every grid independent-set solver.
//!
//! Both strategies answer the same question, so callers (and the
//! cross-validation tests) can hold them behind one trait:
//! - [`RowDp`]: exact DP over per-row alignments; exponential in the width.
//! - [`BipartiteFlow`]: min cut over the checkerboard bipartition; polynomial
//!   in the cell count, no width limit.

use crate::engine::RowDp;
use crate::error::GridError;
use crate::flow::BipartiteFlow;
use crate::grid::Grid;
use crate::selection::Selection;

/// An optimal value together with cells achieving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub value: u64,
    pub selection: Selection,
}

/// A maximum-weight independent-set solver for grids.
pub trait GridSolver {
    /// Short identifier used in logs and benchmarks.
    fn name(&self) -> &'static str;

    /// Maximum total value of non-adjacent cells.
    fn max_value(&self, grid: &Grid) -> Result<u64, GridError>;

    /// Maximum value plus one optimal selection.
    ///
    /// Optimal selections are rarely unique; different solvers may return
    /// different cells for the same value.
    fn solve(&self, grid: &Grid) -> Result<Solution, GridError>;
}

impl GridSolver for RowDp {
    fn name(&self) -> &'static str {
        "row_dp"
    }

    fn max_value(&self, grid: &Grid) -> Result<u64, GridError> {
        RowDp::max_value(self, grid)
    }

    fn solve(&self, grid: &Grid) -> Result<Solution, GridError> {
        let sol = self.solve_with_path(grid)?;
        Ok(Solution {
            value: sol.value,
            selection: sol.selection(),
        })
    }
}

impl GridSolver for BipartiteFlow {
    fn name(&self) -> &'static str {
        "bipartite_flow"
    }

    fn max_value(&self, grid: &Grid) -> Result<u64, GridError> {
        Ok(BipartiteFlow::max_value(self, grid))
    }

    fn solve(&self, grid: &Grid) -> Result<Solution, GridError> {
        let out = BipartiteFlow::solve(self, grid);
        Ok(Solution {
            value: out.max_value(),
            selection: out.selection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solvers_agree_through_trait_objects() {
        let grid = Grid::from_rows(&[vec![4, 9, 2], vec![3, 5, 7], vec![8, 1, 6]]).unwrap();
        let solvers: Vec<Box<dyn GridSolver>> = vec![Box::new(RowDp::new()), Box::new(BipartiteFlow)];
        let values: Vec<u64> = solvers.iter().map(|s| s.max_value(&grid).unwrap()).collect();
        assert_eq!(values[0], values[1]);
        for s in &solvers {
            let sol = s.solve(&grid).unwrap();
            assert_eq!(sol.value, values[0], "{}", s.name());
            assert!(sol.selection.is_independent(), "{}", s.name());
            assert_eq!(sol.selection.score(&grid), sol.value, "{}", s.name());
        }
    }
}
