//! Validated, row-major cell values.
//!
//! Every solver consumes a [`Grid`]. Construction is the only place where the
//! input preconditions are checked: non-empty, rectangular, non-negative, and
//! a total that fits in `u64`.

use crate::error::GridError;

/// An R×C matrix of non-negative cell values stored in one flat buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u64>,
    total: u64,
}

impl Grid {
    /// Build a grid from a flat row-major buffer.
    pub fn new(rows: usize, cols: usize, cells: Vec<u64>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(GridError::DimensionMismatch {
                rows,
                cols,
                found: cells.len(),
            });
        }
        let total = checked_total(&cells)?;
        Ok(Self {
            rows,
            cols,
            cells,
            total,
        })
    }

    /// An all-zero grid.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::new(rows, cols, vec![0; rows.saturating_mul(cols)])
    }

    /// Build a grid from signed nested rows, inferring the shape.
    ///
    /// The first row fixes the column count; every later row must match it.
    pub fn from_rows<R: AsRef<[i64]>>(matrix: &[R]) -> Result<Self, GridError> {
        let cols = matrix.first().map_or(0, |r| r.as_ref().len());
        Self::from_shape(matrix.len(), cols, matrix)
    }

    /// Build a grid from signed nested rows with an explicitly declared shape.
    pub fn from_shape<R: AsRef<[i64]>>(
        rows: usize,
        cols: usize,
        matrix: &[R],
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        if matrix.len() != rows {
            return Err(GridError::DimensionMismatch {
                rows,
                cols,
                found: matrix.iter().map(|r| r.as_ref().len()).sum(),
            });
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, values) in matrix.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let value =
                    u64::try_from(value).map_err(|_| GridError::NegativeValue { row, col, value })?;
                cells.push(value);
            }
        }
        let total = checked_total(&cells)?;
        Ok(Self {
            rows,
            cols,
            cells,
            total,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Values of row `r`.
    #[inline]
    pub fn row(&self, r: usize) -> &[u64] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> u64 {
        self.cells[r * self.cols + c]
    }

    /// Flat row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Sum of every cell value. Bounds every partial sum a solver forms.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.cells.chunks_exact(self.cols)
    }
}

fn checked_total(cells: &[u64]) -> Result<u64, GridError> {
    cells
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v))
        .ok_or(GridError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_infers_shape() {
        let g = Grid::from_rows(&[vec![5, 0], vec![10, 4]]).unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 2));
        assert_eq!(g.row(1), &[10, 4]);
        assert_eq!(g.get(0, 0), 5);
        assert_eq!(g.total(), 19);
    }

    #[test]
    fn rejects_empty_shapes() {
        let none: [Vec<i64>; 0] = [];
        assert_eq!(
            Grid::from_rows(&none),
            Err(GridError::Empty { rows: 0, cols: 0 })
        );
        assert_eq!(
            Grid::from_rows(&[Vec::<i64>::new()]),
            Err(GridError::Empty { rows: 1, cols: 0 })
        );
        assert_eq!(Grid::zeros(3, 0), Err(GridError::Empty { rows: 3, cols: 0 }));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::from_rows(&[vec![1, 2, 3], vec![4, 5]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_negative_cells() {
        let err = Grid::from_rows(&[vec![1, 2], vec![3, -1]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NegativeValue {
                row: 1,
                col: 1,
                value: -1
            }
        );
    }

    #[test]
    fn declared_shape_must_match() {
        let err = Grid::from_shape(3, 2, &[vec![1, 2], vec![3, 4]]).unwrap_err();
        assert!(matches!(err, GridError::DimensionMismatch { rows: 3, .. }));
        let err = Grid::new(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionMismatch {
                rows: 2,
                cols: 2,
                found: 3
            }
        );
    }

    #[test]
    fn rejects_totals_beyond_u64() {
        let err = Grid::new(1, 2, vec![u64::MAX, 1]).unwrap_err();
        assert_eq!(err, GridError::Overflow);
        let g = Grid::new(1, 2, vec![u64::MAX - 1, 1]).unwrap();
        assert_eq!(g.total(), u64::MAX);
    }

    #[test]
    fn iter_rows_yields_every_row() {
        let g = Grid::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[u64]> = g.iter_rows().collect();
        assert_eq!(rows, vec![&[1u64, 2][..], &[3, 4][..], &[5, 6][..]]);
    }
}
