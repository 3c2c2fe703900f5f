//! Error types for grid construction and solving.

use thiserror::Error;

/// Input rejected before it reaches a solver.
///
/// Every variant is a flavour of "invalid input": the solvers themselves
/// cannot fail once handed a well-formed [`Grid`](crate::grid::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    Empty { rows: usize, cols: usize },

    #[error("declared shape {rows}x{cols} does not match {found} supplied cells")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        found: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds negative value {value}")]
    NegativeValue { row: usize, col: usize, value: i64 },

    #[error("{cols} columns exceeds the alignment limit of {limit}")]
    ColumnLimit { cols: usize, limit: usize },

    #[error("sum of all cell values does not fit in u64")]
    Overflow,
}
