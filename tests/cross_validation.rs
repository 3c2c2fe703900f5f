use hr2d::{
    utils::{max_independent_row, path_is_independent, path_score},
    AlignmentCache, BipartiteFlow, Grid, GridSolver, RowDp, Selection,
};
use std::sync::Arc;
use proptest::prelude::*;

/// Exhaustive search over every subset of cells.
fn brute_force(grid: &Grid) -> u64 {
    let (rows, cols) = (grid.rows(), grid.cols());
    let cells = rows * cols;
    let mut best = 0;
    for mask in 0u32..(1 << cells) {
        let mut sel = Selection::empty(rows, cols);
        for idx in 0..cells {
            if (mask >> idx) & 1 == 1 {
                sel.select(idx / cols, idx % cols);
            }
        }
        if sel.is_independent() {
            best = best.max(sel.score(grid));
        }
    }
    best
}

fn grid_strategy(max_rows: usize, max_cols: usize, max_value: u64) -> impl Strategy<Value = Grid> {
    (1..=max_rows, 1..=max_cols).prop_flat_map(move |(r, c)| {
        prop::collection::vec(0..=max_value, r * c)
            .prop_map(move |cells| Grid::new(r, c, cells).unwrap())
    })
}

proptest! {
    #[test]
    fn dp_and_flow_agree(grid in grid_strategy(8, 8, 50)) {
        let dp = RowDp::new().max_value(&grid).unwrap();
        let flow = BipartiteFlow.solve(&grid);
        prop_assert_eq!(dp, flow.max_value());
        prop_assert!(flow.sweep_estimate() >= dp);
    }

    #[test]
    fn both_match_brute_force(grid in grid_strategy(4, 4, 9)) {
        prop_assume!(grid.rows() * grid.cols() <= 12);
        let expected = brute_force(&grid);
        prop_assert_eq!(RowDp::new().max_value(&grid).unwrap(), expected);
        prop_assert_eq!(BipartiteFlow.max_value(&grid), expected);
    }

    #[test]
    fn reconstructed_path_is_consistent(grid in grid_strategy(7, 6, 30)) {
        let dp = RowDp::new();
        let value = dp.max_value(&grid).unwrap();
        let sol = dp.solve_with_path(&grid).unwrap();
        prop_assert_eq!(sol.value, value);
        prop_assert_eq!(sol.path.len(), grid.rows());
        prop_assert!(path_is_independent(&sol.path));
        prop_assert_eq!(path_score(&sol.path, &grid), value);
    }

    #[test]
    fn flow_selection_is_an_optimal_independent_set(grid in grid_strategy(7, 7, 30)) {
        let out = BipartiteFlow.solve(&grid);
        prop_assert!(out.selection.is_independent());
        prop_assert_eq!(out.selection.score(&grid), out.max_value());
    }

    #[test]
    fn flow_selection_is_a_valid_alignment_path(grid in grid_strategy(6, 7, 30)) {
        let cache = Arc::new(AlignmentCache::new());
        let table = cache.get_or_build(grid.cols());
        let out = BipartiteFlow.solve(&grid);
        let path = out.selection.to_alignments().expect("independent rows form alignments");
        prop_assert_eq!(path.len(), grid.rows());
        for ali in &path {
            prop_assert!(table.set.index_of(ali).is_some());
        }
        prop_assert!(path_is_independent(&path));
        prop_assert_eq!(path_score(&path, &grid), out.max_value());
        prop_assert_eq!(&Selection::from_alignments(&path), &out.selection);

        let dp = RowDp::with_cache(cache).solve_with_path(&grid).unwrap();
        prop_assert_eq!(dp.value, out.max_value());
    }

    #[test]
    fn single_row_matches_one_dimensional_recurrence(values in prop::collection::vec(0u64..100, 1..16)) {
        let grid = Grid::new(1, values.len(), values.clone()).unwrap();
        let expected = max_independent_row(&values);
        prop_assert_eq!(RowDp::new().max_value(&grid).unwrap(), expected);
        prop_assert_eq!(BipartiteFlow.max_value(&grid), expected);
    }

    #[test]
    fn transposing_preserves_the_optimum(grid in grid_strategy(6, 6, 20)) {
        let (r, c) = (grid.rows(), grid.cols());
        let transposed: Vec<u64> = (0..c)
            .flat_map(|j| (0..r).map(move |i| (i, j)))
            .map(|(i, j)| grid.get(i, j))
            .collect();
        let t = Grid::new(c, r, transposed).unwrap();
        prop_assert_eq!(
            RowDp::new().max_value(&grid).unwrap(),
            RowDp::new().max_value(&t).unwrap()
        );
    }
}

#[test]
fn trait_solvers_agree_on_seeded_grids() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(4);
    let solvers: Vec<Box<dyn GridSolver>> = vec![Box::new(RowDp::new()), Box::new(BipartiteFlow)];
    for _ in 0..50 {
        let (r, c) = (rng.gen_range(1..12), rng.gen_range(1..9));
        let cells = (0..r * c).map(|_| rng.gen_range(0..10)).collect();
        let grid = Grid::new(r, c, cells).unwrap();
        let values: Vec<u64> = solvers
            .iter()
            .map(|s| s.solve(&grid).unwrap().value)
            .collect();
        assert_eq!(values[0], values[1], "grid {r}x{c}: {:?}", grid.cells());
    }
}
