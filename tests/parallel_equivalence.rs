#![cfg(feature = "parallel")]

use hr2d::{utils::path_is_independent, AlignmentCache, BipartiteFlow, Grid, RowDp};
use proptest::prelude::*;
use rayon::prelude::*;
use std::sync::Arc;

// Widths of 12 and above have enough alignments to take the parallel
// transition; narrower grids stay on the serial path.
fn wide_grid() -> impl Strategy<Value = Grid> {
    (1usize..6, 12usize..15).prop_flat_map(|(r, c)| {
        prop::collection::vec(0u64..40, r * c).prop_map(move |cells| Grid::new(r, c, cells).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn parallel_transition_matches_flow(grid in wide_grid()) {
        let sol = RowDp::new().solve_with_path(&grid).unwrap();
        prop_assert_eq!(sol.value, BipartiteFlow.max_value(&grid));
        prop_assert!(path_is_independent(&sol.path));
    }
}

#[test]
fn concurrent_solves_share_one_cache() {
    let cache = Arc::new(AlignmentCache::new());
    let grids: Vec<Grid> = (0..16u64)
        .map(|seed| {
            let cells = (0..4 * 13).map(|i| (i * 31 + seed * 17) % 23).collect();
            Grid::new(4, 13, cells).unwrap()
        })
        .collect();

    let dp = RowDp::with_cache(Arc::clone(&cache));
    let parallel: Vec<u64> = grids.par_iter().map(|g| dp.max_value(g).unwrap()).collect();
    let serial: Vec<u64> = grids.iter().map(|g| BipartiteFlow.max_value(g)).collect();

    assert_eq!(parallel, serial);
    assert_eq!(cache.widths(), vec![13]);
}
