//! Cell masks describing a chosen set of grid cells.

use crate::alignment::{Alignment, MAX_ALIGNMENT_WIDTH};
use crate::grid::Grid;

/// Row-major boolean mask over an R×C grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Selection {
    /// A selection with nothing chosen.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Stack one alignment per row.
    ///
    /// # Panics
    /// Panics if the alignments do not all share one width.
    pub fn from_alignments(path: &[Alignment]) -> Self {
        let cols = path.first().map_or(0, Alignment::width);
        let mut sel = Self::empty(path.len(), cols);
        for (r, ali) in path.iter().enumerate() {
            assert_eq!(ali.width(), cols, "row {r} has a different width");
            for c in ali.selected_columns() {
                sel.select(r, c);
            }
        }
        sel
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn select(&mut self, r: usize, c: usize) {
        self.cells[r * self.cols + c] = true;
    }

    #[inline]
    pub fn is_selected(&self, r: usize, c: usize) -> bool {
        self.cells[r * self.cols + c]
    }

    /// Number of chosen cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&s| s).count()
    }

    /// Chosen `(row, col)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s)
            .map(move |(i, _)| (i / self.cols, i % self.cols))
    }

    /// True if no two chosen cells share an edge.
    pub fn is_independent(&self) -> bool {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if !self.is_selected(r, c) {
                    continue;
                }
                if c + 1 < self.cols && self.is_selected(r, c + 1) {
                    return false;
                }
                if r + 1 < self.rows && self.is_selected(r + 1, c) {
                    return false;
                }
            }
        }
        true
    }

    /// Sum of `grid` values over the chosen cells.
    pub fn score(&self, grid: &Grid) -> u64 {
        debug_assert_eq!((grid.rows(), grid.cols()), (self.rows, self.cols));
        self.cells().map(|(r, c)| grid.get(r, c)).sum()
    }

    /// One alignment per row, or `None` if the grid is too wide for a bitmask
    /// or some row selects two neighbouring columns.
    pub fn to_alignments(&self) -> Option<Vec<Alignment>> {
        if self.cols > MAX_ALIGNMENT_WIDTH {
            return None;
        }
        let path: Vec<Alignment> = self
            .cells
            .chunks_exact(self.cols.max(1))
            .take(self.rows)
            .map(|row| {
                let bits = row
                    .iter()
                    .enumerate()
                    .filter(|&(_, &s)| s)
                    .fold(0u64, |acc, (j, _)| acc | (1 << j));
                Alignment::from_bits(bits, self.cols)
            })
            .collect();
        path.iter().all(Alignment::is_valid).then_some(path)
    }
}
