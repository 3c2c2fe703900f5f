use crate::cache::AlignmentCache;
use crate::engine::{RowDp, DEFAULT_MAX_COLUMNS};
use crate::error::GridError;
use crate::flow::BipartiteFlow;
use crate::grid::Grid;
use crate::traits::{GridSolver, Solution};
use std::sync::Arc;

/// Which algorithm a [`Solver`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    RowDp,
    Flow,
}

pub struct SolverBuilder {
    strategy: Strategy,
    max_columns: Option<usize>,
    cache: Option<Arc<AlignmentCache>>,
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            max_columns: None,
            cache: None,
        }
    }
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
    /// Widest grid the row DP accepts. Ignored by the flow strategy.
    pub fn max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = Some(max_columns);
        self
    }
    pub fn with_cache(mut self, cache: Arc<AlignmentCache>) -> Self {
        self.cache = Some(cache);
        self
    }
    pub fn build(self) -> Solver {
        match self.strategy {
            Strategy::RowDp => {
                let cache = self.cache.unwrap_or_default();
                let dp = RowDp::with_cache(cache)
                    .with_max_columns(self.max_columns.unwrap_or(DEFAULT_MAX_COLUMNS));
                Solver::RowDp(dp)
            }
            Strategy::Flow => Solver::Flow(BipartiteFlow),
        }
    }
}

/// A configured solver of either strategy.
#[derive(Clone, Debug)]
pub enum Solver {
    RowDp(RowDp),
    Flow(BipartiteFlow),
}

impl Solver {
    pub fn strategy(&self) -> Strategy {
        match self {
            Solver::RowDp(_) => Strategy::RowDp,
            Solver::Flow(_) => Strategy::Flow,
        }
    }

    fn inner(&self) -> &dyn GridSolver {
        match self {
            Solver::RowDp(dp) => dp,
            Solver::Flow(flow) => flow,
        }
    }
}

impl GridSolver for Solver {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn max_value(&self, grid: &Grid) -> Result<u64, GridError> {
        self.inner().max_value(grid)
    }

    fn solve(&self, grid: &Grid) -> Result<Solution, GridError> {
        self.inner().solve(grid)
    }
}
