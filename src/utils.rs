//! Assorted helpers shared by the solvers and their tests.

use crate::alignment::Alignment;
use crate::grid::Grid;

/// Total value of a per-row alignment path over `grid`.
pub fn path_score(path: &[Alignment], grid: &Grid) -> u64 {
    path.iter()
        .zip(grid.iter_rows())
        .map(|(ali, row)| ali.score(row))
        .sum()
}

/// True if every row is a valid alignment and consecutive rows share no
/// selected column.
pub fn path_is_independent(path: &[Alignment]) -> bool {
    path.iter().all(Alignment::is_valid) && path.windows(2).all(|w| w[0].dot(&w[1]) == 0)
}

/// Checkerboard colour of a cell: `true` for the source side (even parity).
#[inline]
pub fn is_source_side(r: usize, c: usize) -> bool {
    (r + c) % 2 == 0
}

/// Classic 1D house-robber recurrence over a single row.
pub fn max_independent_row(values: &[u64]) -> u64 {
    let (mut take, mut skip) = (0u64, 0u64);
    for &v in values {
        let next_take = skip + v;
        skip = skip.max(take);
        take = next_take;
    }
    take.max(skip)
}
