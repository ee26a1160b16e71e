use rand::prelude::*;
use std::collections::HashSet;

use crate::graph::{AdjacencyMap, Cost};

/// Name of the `i`-th node produced by [`generate_random`]
pub fn node_name(i: usize) -> String {
    format!("n{}", i)
}

/// Name of the grid cell at column `x`, row `y` produced by [`generate_grid`]
pub fn cell_name(x: usize, y: usize) -> String {
    format!("{}:{}", x, y)
}

/// Generates a random directed graph with `n` nodes named `n0..n{n-1}` and
/// roughly `edge_factor * n` edges with costs in `[1, 100)`.
///
/// Every node gets an adjacency record, even when it ends up with no edges.
pub fn generate_random<R: Rng>(n: usize, edge_factor: f64, rng: &mut R) -> AdjacencyMap<String> {
    let mut edges: Vec<Vec<(String, Cost)>> = vec![Vec::new(); n];
    if n > 1 {
        let num_edges = (edge_factor * n as f64) as usize;
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops
            if u != v {
                let cost = Cost::clamped(rng.gen_range(1.0..100.0));
                edges[u].push((node_name(v), cost));
            }
        }
    }

    let mut graph = AdjacencyMap::with_capacity(n);
    for (u, out) in edges.into_iter().enumerate() {
        graph.set_neighbours(node_name(u), out);
    }
    graph
}

/// Generates a `width x height` grid with 8-way movement: cardinal moves cost
/// 1.0 and diagonal moves 1.4. Cells listed in `blocked` get no record and no
/// incoming edges.
pub fn generate_grid(
    width: usize,
    height: usize,
    blocked: &HashSet<(usize, usize)>,
) -> AdjacencyMap<String> {
    let mut graph = AdjacencyMap::with_capacity(width * height);

    // Define possible moves (8 directions)
    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, Cost::clamped(1.0)),
        (1, 0, Cost::clamped(1.0)),
        (0, 1, Cost::clamped(1.0)),
        (-1, 0, Cost::clamped(1.0)),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, Cost::clamped(1.4)),
        (1, 1, Cost::clamped(1.4)),
        (-1, 1, Cost::clamped(1.4)),
        (-1, -1, Cost::clamped(1.4)),
    ];

    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }

            let mut out = Vec::with_capacity(directions.len());
            for &(dx, dy, cost) in &directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !blocked.contains(&(nx, ny)) {
                        out.push((cell_name(nx, ny), cost));
                    }
                }
            }
            graph.set_neighbours(cell_name(x, y), out);
        }
    }

    graph
}
