use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_graph::graph::generators::{cell_name, generate_grid, generate_random, node_name};
use dijkstra_graph::{PathFinder, PathOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_path");
    let options = PathOptions::default().with_cost(true);

    for &size in &[1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let finder = PathFinder::from_graph(generate_random(size, 4.0, &mut rng));
        let start = node_name(0);
        let goal = node_name(size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| finder.path(black_box(&start), black_box(&goal), &options))
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let finder = PathFinder::from_graph(generate_grid(100, 100, &HashSet::new()));
    let start = cell_name(0, 0);
    let goal = cell_name(99, 99);
    let options = PathOptions::default();

    c.bench_function("grid_100x100_corner_to_corner", |b| {
        b.iter(|| finder.path(black_box(&start), black_box(&goal), &options))
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
