//! Example: robbing a small city laid out on a grid.
//!
//! Run with:
//! `cargo run --example city`

use hr2d::{BipartiteFlow, Grid, RowDp};

fn main() {
    // Each cell is the loot in one house; adjacent houses share an alarm.
    let houses = vec![
        vec![10, 20, 10, 5],
        vec![20, 30, 20, 40],
        vec![10, 20, 10, 5],
        vec![3, 8, 60, 1],
    ];
    let grid = match Grid::from_rows(&houses) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("city: {err}");
            std::process::exit(2);
        }
    };

    let dp = RowDp::new();
    let sol = match dp.solve_with_path(&grid) {
        Ok(sol) => sol,
        Err(err) => {
            eprintln!("city: {err}");
            std::process::exit(1);
        }
    };
    let flow = BipartiteFlow.solve(&grid);

    println!("Row DP maximum:   {}", sol.value);
    println!(
        "Min-cut maximum:  {} (sweep {} + completion {} of {} total)",
        flow.max_value(),
        flow.sweep_flow,
        flow.completion_flow,
        flow.total_value
    );
    println!("Houses to rob, row by row:");
    for (r, ali) in sol.path.iter().enumerate() {
        println!("  row {r}: {ali}");
    }
}
