//! Row-by-row dynamic program over alignments.
//!
//! Each grid row is a layer; the frontier at a layer is a flat score vector
//! indexed by alignment: `scores[a]` is the best total over all rows so far
//! given that the current row uses alignment `a`. One transition:
//!
//! ```text
//! next[b] = max over a with dot(a, b) == 0 of  scores[a] + row_score[b]
//! ```
//!
//! The transition is evaluated in push order (for each `a`, for each partner
//! `b`) with a strict comparison, so ties keep the earliest `a`. When a path is
//! requested, the winning `a` is stored in a flat predecessor arena of
//! `(rows - 1) × N` entries and walked backwards at the end.

use crate::alignment::Alignment;
use crate::cache::{AlignmentCache, AlignmentTable};
use crate::compat::CompatibilityIndex;
use crate::error::GridError;
use crate::grid::Grid;
use crate::selection::Selection;
use crate::utils::path_score;
use std::sync::Arc;

/// Default upper bound on grid width for the row DP.
pub const DEFAULT_MAX_COLUMNS: usize = 20;

/// Below this many alignments the parallel transition is not worth spawning.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_ALIGNMENTS: usize = 256;

/// Optimal value plus one alignment per row achieving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpSolution {
    pub value: u64,
    pub path: Vec<Alignment>,
}

impl DpSolution {
    /// The chosen cells as a grid mask.
    pub fn selection(&self) -> Selection {
        Selection::from_alignments(&self.path)
    }
}

/// Runs the row DP for grids whose width matches one alignment table.
///
/// The engine borrows the table; it never mutates it, so one table can serve
/// many engines at once.
pub struct RowDpEngine<'t> {
    table: &'t AlignmentTable,
}

impl<'t> RowDpEngine<'t> {
    pub fn new(table: &'t AlignmentTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AlignmentTable {
        self.table
    }

    /// Maximum independent-set value of `grid`.
    ///
    /// # Panics
    /// Panics if `grid.cols()` differs from the table width.
    pub fn max_value(&self, grid: &Grid) -> u64 {
        let scores = self.forward(grid, None);
        best_index(&scores).1
    }

    /// Maximum value plus the alignment sequence that achieves it.
    ///
    /// # Panics
    /// Panics if `grid.cols()` differs from the table width.
    pub fn solve_with_path(&self, grid: &Grid) -> DpSolution {
        let n = self.table.len();
        let rows = grid.rows();
        let mut preds = vec![0u32; (rows - 1) * n];
        let scores = self.forward(grid, Some(preds.as_mut_slice()));
        let (best, value) = best_index(&scores);

        let set = &self.table.set;
        let mut path = vec![Alignment::empty(grid.cols()); rows];
        let mut a = best;
        for i in (1..rows).rev() {
            path[i] = *set.get(a);
            a = preds[(i - 1) * n + a] as usize;
        }
        path[0] = *set.get(a);

        debug_assert_eq!(path_score(&path, grid), value, "predecessor walk drifted");
        DpSolution { value, path }
    }

    /// Forward pass over all rows; returns the final score vector.
    fn forward(&self, grid: &Grid, mut preds: Option<&mut [u32]>) -> Vec<u64> {
        assert_eq!(
            grid.cols(),
            self.table.width(),
            "grid width does not match alignment table"
        );
        let n = self.table.len();
        let set = &self.table.set;
        let compat = &self.table.compat;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("row_dp", rows = grid.rows(), cols = grid.cols(), alignments = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut scores = vec![0u64; n];
        set.row_scores(grid.row(0), &mut scores);

        let mut row_scores = vec![0u64; n];
        let mut next = vec![0u64; n];
        for i in 1..grid.rows() {
            set.row_scores(grid.row(i), &mut row_scores);
            let pred_row = preds
                .as_deref_mut()
                .map(|p| &mut p[(i - 1) * n..i * n]);
            transition(compat, &scores, &row_scores, &mut next, pred_row);
            std::mem::swap(&mut scores, &mut next);
        }
        scores
    }
}

/// First index holding the maximum score, and that score.
fn best_index(scores: &[u64]) -> (usize, u64) {
    let mut best = (0, 0);
    for (j, &v) in scores.iter().enumerate() {
        if v > best.1 {
            best = (j, v);
        }
    }
    best
}

#[cfg(feature = "parallel")]
fn transition(
    compat: &CompatibilityIndex,
    scores: &[u64],
    row_scores: &[u64],
    next: &mut [u64],
    preds: Option<&mut [u32]>,
) {
    if scores.len() >= PARALLEL_MIN_ALIGNMENTS {
        transition_pull_parallel(compat, scores, row_scores, next, preds);
    } else {
        transition_push(compat, scores, row_scores, next, preds);
    }
}

#[cfg(not(feature = "parallel"))]
fn transition(
    compat: &CompatibilityIndex,
    scores: &[u64],
    row_scores: &[u64],
    next: &mut [u64],
    preds: Option<&mut [u32]>,
) {
    transition_push(compat, scores, row_scores, next, preds);
}

fn transition_push(
    compat: &CompatibilityIndex,
    scores: &[u64],
    row_scores: &[u64],
    next: &mut [u64],
    mut preds: Option<&mut [u32]>,
) {
    next.fill(0);
    if let Some(p) = preds.as_deref_mut() {
        p.fill(0);
    }
    for (a, &score_a) in scores.iter().enumerate() {
        for &b in compat.partners(a) {
            let b = b as usize;
            let cand = score_a + row_scores[b];
            if cand > next[b] {
                next[b] = cand;
                if let Some(p) = preds.as_deref_mut() {
                    p[b] = a as u32;
                }
            }
        }
    }
}

/// Pull form of the transition: each `b` scans its own partner list.
///
/// Compatibility is symmetric and partner lists are ascending, so scanning
/// `partners(b)` visits exactly the `a` that push into `b`, in the same order.
/// Scores and predecessors therefore match [`transition_push`] exactly.
#[cfg(feature = "parallel")]
fn transition_pull_parallel(
    compat: &CompatibilityIndex,
    scores: &[u64],
    row_scores: &[u64],
    next: &mut [u64],
    preds: Option<&mut [u32]>,
) {
    use rayon::prelude::*;

    let pull = |b: usize| -> (u64, u32) {
        let mut best = (0u64, 0u32);
        for &a in compat.partners(b) {
            let cand = scores[a as usize] + row_scores[b];
            if cand > best.0 {
                best = (cand, a);
            }
        }
        best
    };

    match preds {
        Some(p) => next
            .par_iter_mut()
            .zip(p.par_iter_mut())
            .enumerate()
            .for_each(|(b, (slot, from))| {
                let (score, a) = pull(b);
                *slot = score;
                *from = a;
            }),
        None => next
            .par_iter_mut()
            .enumerate()
            .for_each(|(b, slot)| *slot = pull(b).0),
    }
}

/// Row DP solver with input validation and a shared alignment cache.
#[derive(Clone, Debug)]
pub struct RowDp {
    cache: Arc<AlignmentCache>,
    max_columns: usize,
}

impl Default for RowDp {
    fn default() -> Self {
        Self::new()
    }
}

impl RowDp {
    /// A solver with a private cache and [`DEFAULT_MAX_COLUMNS`].
    pub fn new() -> Self {
        Self::with_cache(Arc::new(AlignmentCache::new()))
    }

    /// A solver drawing alignment tables from `cache`.
    pub fn with_cache(cache: Arc<AlignmentCache>) -> Self {
        Self {
            cache,
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }

    /// Override the widest grid this solver accepts.
    pub fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns.min(crate::alignment::MAX_ALIGNMENT_WIDTH);
        self
    }

    pub fn max_columns(&self) -> usize {
        self.max_columns
    }

    pub fn cache(&self) -> &Arc<AlignmentCache> {
        &self.cache
    }

    /// The alignment table for `grid`'s width, or an error if it is too wide.
    pub fn table_for(&self, grid: &Grid) -> Result<Arc<AlignmentTable>, GridError> {
        if grid.cols() > self.max_columns {
            return Err(GridError::ColumnLimit {
                cols: grid.cols(),
                limit: self.max_columns,
            });
        }
        Ok(self.cache.get_or_build(grid.cols()))
    }

    pub fn max_value(&self, grid: &Grid) -> Result<u64, GridError> {
        let table = self.table_for(grid)?;
        Ok(RowDpEngine::new(&table).max_value(grid))
    }

    pub fn solve_with_path(&self, grid: &Grid) -> Result<DpSolution, GridError> {
        let table = self.table_for(grid)?;
        Ok(RowDpEngine::new(&table).solve_with_path(grid))
    }
}
