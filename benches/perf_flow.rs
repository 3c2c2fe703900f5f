use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hr2d::{BipartiteFlow, Grid};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize) -> Grid {
    let cells = (0..rows * cols).map(|_| rng.gen_range(0..10)).collect();
    Grid::new(rows, cols, cells).unwrap()
}

fn bench_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("bipartite_flow");
    group.sample_size(20);
    for &(rows, cols) in &[(10_000usize, 6usize), (100, 100), (300, 300)] {
        group.bench_function(format!("{rows}x{cols}"), |b| {
            b.iter_batched(
                || random_grid(&mut StdRng::seed_from_u64(4), rows, cols),
                |grid| {
                    let out = BipartiteFlow.solve(&grid);
                    criterion::black_box((out.max_value(), out.augmenting_paths));
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flow);
criterion_main!(benches);
