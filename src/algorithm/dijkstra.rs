use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::Frontier;
use crate::graph::cost::saturating_add;
use crate::graph::Graph;
use crate::Result;

/// Lifecycle of a single shortest-path query
///
/// `Seeded -> Iterating -> Found | Exhausted`. The two terminal states are
/// reached exactly once per query and immediately produce the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The frontier holds only the start node
    Seeded,
    /// At least one node has been extracted
    Iterating,
    /// The goal was extracted
    Found,
    /// The frontier ran dry before the goal was extracted
    Exhausted,
}

/// A minimum-cost path, start first
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath<N> {
    pub nodes: Vec<N>,
    pub cost: f64,
}

/// Costs and back-pointers for every node reachable from a source
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N>
where
    N: Eq + Hash + Clone + Debug,
{
    /// Source node
    pub source: N,

    /// Finalized cost from the source to each reachable node
    pub distances: HashMap<N, f64>,

    /// Predecessor of each reachable node other than the source
    pub predecessors: HashMap<N, N>,
}

impl<N> ShortestPathTree<N>
where
    N: Eq + Hash + Clone + Debug,
{
    /// Rebuilds the path from the source to `target`, or `None` if the
    /// target was not reached.
    pub fn path_to(&self, target: &N) -> Option<FoundPath<N>> {
        let cost = *self.distances.get(target)?;
        Some(FoundPath {
            nodes: walk_back(&self.predecessors, target),
            cost,
        })
    }
}

/// Classic Dijkstra's algorithm over a [`Graph`] of keyed nodes
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Finds the minimum-cost path from `start` to `goal`.
    ///
    /// Neither node has to have an adjacency record; a start without one
    /// still seeds the search. An empty graph never has a path.
    pub fn shortest_path<N, G>(&self, graph: &G, start: &N, goal: &N) -> Result<Option<FoundPath<N>>>
    where
        N: Eq + Hash + Clone + Debug,
        G: Graph<N>,
    {
        if graph.node_count() == 0 {
            debug!("Empty graph, no path from {:?} to {:?}", start, goal);
            return Ok(None);
        }

        let mut search = Search::seeded(graph, start)?;
        while let Some((node, cost)) = search.next_finalized()? {
            if node == *goal {
                search.transition(SearchState::Found);
                let nodes = walk_back(&search.previous, goal);
                debug!(
                    "Path {:?} -> {:?}: {} nodes, cost {} ({} explored)",
                    start,
                    goal,
                    nodes.len(),
                    cost,
                    search.explored.len()
                );
                return Ok(Some(FoundPath { nodes, cost }));
            }
            search.relax(node, cost)?;
        }

        debug!(
            "No path {:?} -> {:?} ({} explored)",
            start,
            goal,
            search.explored.len()
        );
        Ok(None)
    }

    /// Compute shortest paths from `source` to every reachable node
    pub fn compute_shortest_paths<N, G>(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N>>
    where
        N: Eq + Hash + Clone + Debug,
        G: Graph<N>,
    {
        let mut distances = HashMap::new();
        if graph.node_count() == 0 {
            return Ok(ShortestPathTree {
                source: source.clone(),
                distances,
                predecessors: HashMap::new(),
            });
        }

        let mut search = Search::seeded(graph, source)?;
        while let Some((node, cost)) = search.next_finalized()? {
            distances.insert(node.clone(), cost);
            search.relax(node, cost)?;
        }

        debug!("Shortest path tree from {:?}: {} nodes reached", source, distances.len());
        Ok(ShortestPathTree {
            source: source.clone(),
            distances,
            predecessors: search.previous,
        })
    }
}

/// Transient state of one query; dropped when the query returns
struct Search<'g, N, G>
where
    N: Eq + Hash + Clone + Debug,
{
    graph: &'g G,
    frontier: Frontier<N, f64>,
    explored: HashSet<N>,
    previous: HashMap<N, N>,
    state: SearchState,
}

impl<'g, N, G> Search<'g, N, G>
where
    N: Eq + Hash + Clone + Debug,
    G: Graph<N>,
{
    fn seeded(graph: &'g G, start: &N) -> Result<Self> {
        let mut frontier = Frontier::new();
        frontier.insert_or_update(start.clone(), 0.0)?;
        Ok(Search {
            graph,
            frontier,
            explored: HashSet::new(),
            previous: HashMap::new(),
            state: SearchState::Seeded,
        })
    }

    fn transition(&mut self, next: SearchState) {
        if self.state != next {
            trace!("Search {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Extracts the cheapest frontier node, whose cost is now final.
    /// Returns `None` once the frontier is empty.
    fn next_finalized(&mut self) -> Result<Option<(N, f64)>> {
        if self.frontier.is_empty() {
            self.transition(SearchState::Exhausted);
            return Ok(None);
        }
        self.transition(SearchState::Iterating);
        let entry = self.frontier.extract_min()?;
        Ok(Some((entry.key, entry.priority)))
    }

    /// Marks `node` explored and relaxes its outgoing edges
    fn relax(&mut self, node: N, cost: f64) -> Result<()> {
        self.explored.insert(node.clone());
        let graph = self.graph;
        for (neighbour, edge_cost) in graph.outgoing_edges(&node) {
            if self.explored.contains(neighbour) {
                continue;
            }

            let candidate = saturating_add(cost, edge_cost.value());
            let improves = match self.frontier.peek(neighbour) {
                None => true,
                Some(current) => candidate < current,
            };

            if improves {
                trace!("Relax {:?} -> {:?}: {}", node, neighbour, candidate);
                self.frontier.insert_or_update(neighbour.clone(), candidate)?;
                self.previous.insert(neighbour.clone(), node.clone());
            }
        }
        Ok(())
    }
}

/// Follows back-pointers from `target` to the root and returns the chain
/// root first. The root is the only node on the chain without a pointer.
fn walk_back<N>(previous: &HashMap<N, N>, target: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut nodes = vec![target.clone()];
    let mut current = target;
    while let Some(prev) = previous.get(current) {
        nodes.push(prev.clone());
        current = prev;
    }
    nodes.reverse();
    nodes
}
