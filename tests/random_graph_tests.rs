use dijkstra_graph::graph::generators::{generate_random, node_name};
use dijkstra_graph::{AdjacencyMap, Graph, PathFinder, PathOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

const EPS: f64 = 1e-9;

// Bellman-Ford over the whole graph, used as the reference answer
fn reference_distances(graph: &AdjacencyMap<String>, source: &str) -> HashMap<String, f64> {
    let mut dist: HashMap<String, f64> = HashMap::new();
    dist.insert(source.to_string(), 0.0);

    for _ in 0..=graph.node_count() {
        let mut changed = false;
        for (node, edges) in graph.iter() {
            let Some(&d) = dist.get(node) else { continue };
            for (target, cost) in edges {
                let candidate = d + cost.value();
                let better = dist.get(target).map_or(true, |&old| candidate < old - EPS);
                if better {
                    dist.insert(target.clone(), candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

#[test]
fn test_random_graphs_match_reference() {
    let mut rng = StdRng::seed_from_u64(7);
    let options = PathOptions::default().with_cost(true);

    for &(n, edge_factor) in &[(20usize, 1.0), (60, 2.5), (120, 4.0)] {
        let graph = generate_random(n, edge_factor, &mut rng);
        let finder = PathFinder::from_graph(graph.clone());

        for _ in 0..10 {
            let source = node_name(rng.gen_range(0..n));
            let expected = reference_distances(&graph, &source);

            for target_idx in 0..n {
                let target = node_name(target_idx);
                let route = finder.path(&source, &target, &options).unwrap();

                match expected.get(&target) {
                    Some(&want) => {
                        let path = route.nodes().expect("reference found a path");
                        let got = route.cost().unwrap();
                        assert!((got - want).abs() < EPS, "{} -> {}: {} vs {}", source, target, got, want);

                        assert_eq!(path.first(), Some(&source));
                        assert_eq!(path.last(), Some(&target));
                        let summed: f64 = path
                            .windows(2)
                            .map(|pair| graph.edge_cost(&pair[0], &pair[1]).expect("path edge exists").value())
                            .sum();
                        assert!((summed - got).abs() < EPS);
                    }
                    None => {
                        assert!(route.is_none(), "{} -> {} should be unreachable", source, target);
                        assert_eq!(route.cost(), Some(0.0));
                    }
                }
            }
        }
    }
}

#[test]
fn test_random_distances_match_reference() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = generate_random(80, 3.0, &mut rng);
    let finder = PathFinder::from_graph(graph.clone());

    for idx in [0, 17, 42, 79] {
        let source = node_name(idx);
        let expected = reference_distances(&graph, &source);
        let got = finder.distances(&source).unwrap();

        assert_eq!(got.len(), expected.len());
        for (node, want) in &expected {
            assert!((got[node] - want).abs() < EPS);
        }
    }
}

#[test]
fn test_random_reverse_and_trim_properties() {
    let mut rng = StdRng::seed_from_u64(23);
    let finder = PathFinder::from_graph(generate_random(50, 3.0, &mut rng));

    for _ in 0..40 {
        let source = node_name(rng.gen_range(0..50));
        let target = node_name(rng.gen_range(0..50));

        let plain = finder.path(&source, &target, &PathOptions::default()).unwrap();
        let reversed = finder
            .path(&source, &target, &PathOptions::default().with_reverse(true))
            .unwrap();
        let trimmed = finder
            .path(&source, &target, &PathOptions::default().with_trim(true))
            .unwrap();

        match plain.nodes() {
            Some(nodes) => {
                let mut back = nodes.to_vec();
                back.reverse();
                assert_eq!(reversed.nodes(), Some(back.as_slice()));
                assert_eq!(trimmed.nodes().map(<[String]>::len), Some(nodes.len().saturating_sub(2)));
            }
            None => {
                assert!(reversed.is_none());
                assert!(trimmed.is_none());
            }
        }
    }
}
