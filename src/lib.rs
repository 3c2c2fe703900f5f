//! Maximum-weight independent sets on grids (the "2D house robber" problem).
//!
//! Given an R×C matrix of non-negative values, choose cells so that no two
//! chosen cells share an edge and the chosen values sum to the maximum.
//!
//! ## Two solvers
//! 1. [`RowDp`]: a dynamic program whose per-row state is an *alignment*, one
//!    of the F(C+2) selection patterns of a row without adjacent cells. Rows
//!    are chained through a precomputed compatibility index. It can also
//!    return the optimal alignment of every row.
//! 2. [`BipartiteFlow`]: the grid is bipartite (checkerboard colouring), so
//!    the answer is `total − min cut` of a source/sink network over the two
//!    colour classes.
//!
//! Both must agree on every input, and the test suite checks that they do.
//!
//! ## Quick start
//! ```
//! let matrix = vec![vec![10, 20, 10], vec![20, 30, 20], vec![10, 20, 10]];
//!
//! assert_eq!(hr2d::solve_dp(3, 3, &matrix).unwrap(), 80);
//! assert_eq!(hr2d::solve_flow(3, 3, &matrix).unwrap(), 80);
//!
//! let (value, path) = hr2d::solve_dp_with_path(3, 3, &matrix).unwrap();
//! assert_eq!(value, 80);
//! assert_eq!(path[1].flags(), vec![1, 0, 1]);
//! ```
//!
//! Repeated DP solves over grids of the same width can share an
//! [`AlignmentCache`] through [`SolverBuilder::with_cache`].

pub mod alignment;
pub mod builder;
pub mod cache;
pub mod compat;
pub mod engine;
pub mod error;
pub mod flow;
pub mod grid;
pub mod selection;
pub mod traits;
pub mod utils;

pub use crate::alignment::{Alignment, AlignmentSet};
pub use crate::builder::{Solver, SolverBuilder, Strategy};
pub use crate::cache::{AlignmentCache, AlignmentTable};
pub use crate::compat::CompatibilityIndex;
pub use crate::engine::{DpSolution, RowDp, RowDpEngine};
pub use crate::error::GridError;
pub use crate::flow::{BipartiteFlow, FlowOutcome};
pub use crate::grid::Grid;
pub use crate::selection::Selection;
pub use crate::traits::{GridSolver, Solution};

/// Maximum value by the row DP.
///
/// `matrix` must hold exactly `rows` rows of `cols` non-negative values.
pub fn solve_dp<R: AsRef<[i64]>>(rows: usize, cols: usize, matrix: &[R]) -> Result<u64, GridError> {
    let grid = Grid::from_shape(rows, cols, matrix)?;
    RowDp::new().max_value(&grid)
}

/// Maximum value by the row DP, plus the optimal alignment of every row.
pub fn solve_dp_with_path<R: AsRef<[i64]>>(
    rows: usize,
    cols: usize,
    matrix: &[R],
) -> Result<(u64, Vec<Alignment>), GridError> {
    let grid = Grid::from_shape(rows, cols, matrix)?;
    let sol = RowDp::new().solve_with_path(&grid)?;
    Ok((sol.value, sol.path))
}

/// Maximum value by the min-cut solver. `matrix` is only read.
pub fn solve_flow<R: AsRef<[i64]>>(rows: usize, cols: usize, matrix: &[R]) -> Result<u64, GridError> {
    flow::solve_rows(rows, cols, matrix).map(|out| out.max_value())
}
