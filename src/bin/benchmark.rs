use dijkstra_graph::graph::generators::{generate_random, node_name};
use dijkstra_graph::{PathFinder, PathOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::time::{Duration, Instant};

/// Number of point-to-point queries timed per graph
const QUERIES: usize = 200;

// Time a batch of queries, sequentially or through the parallel batch API
fn benchmark_queries(
    finder: &PathFinder,
    queries: &[(String, String)],
    parallel: bool,
) -> Result<(Duration, usize), dijkstra_graph::Error> {
    let options = PathOptions::default().with_cost(true);
    let start = Instant::now();

    let results = if parallel {
        finder.paths(queries, &options)?
    } else {
        queries
            .iter()
            .map(|(s, g)| finder.path(s, g, &options))
            .collect::<Result<Vec<_>, _>>()?
    };

    let duration = start.elapsed();
    let found = results.iter().filter(|r| !r.is_none()).count();
    Ok((duration, found))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Graph sizes from the command line, or a default ladder
    let mut graph_sizes: Vec<usize> = env::args()
        .skip(1)
        .filter_map(|a| a.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .collect();
    if graph_sizes.is_empty() {
        graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    }

    // Edge factor: average number of edges per node
    let edge_factor = 4.0;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: {} point-to-point queries per graph", QUERIES);
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let finder = PathFinder::from_graph(generate_random(size, edge_factor, &mut rng));
        println!("Graph has {} nodes and {} edges", finder.node_count(), finder.edge_count());

        let queries: Vec<(String, String)> = (0..QUERIES)
            .map(|_| (node_name(rng.gen_range(0..size)), node_name(rng.gen_range(0..size))))
            .collect();

        let (sequential, found) = benchmark_queries(&finder, &queries, false)?;
        let (parallel, _) = benchmark_queries(&finder, &queries, true)?;
        println!("  - {} of {} queries found a path", found, QUERIES);
        println!("  - Sequential: {:?}, parallel: {:?}", sequential, parallel);

        results.push((size, sequential, parallel, found));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10} | {:<8}",
        "Nodes", "Sequential (ms)", "Parallel (ms)", "Speedup", "Found"
    );
    println!("-----------------------------------------------------");

    for (size, sequential, parallel, found) in &results {
        let speedup = sequential.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2} | {:<8}",
            size,
            sequential.as_millis(),
            parallel.as_millis(),
            speedup,
            found
        );
    }

    Ok(())
}
