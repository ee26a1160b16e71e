use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::traits::Graph;
use crate::graph::Cost;

/// A directed graph implementation using adjacency lists keyed by node
///
/// Each node owns the list of its outgoing edges in the order they were
/// given, with at most one entry per target. Targets do not need a record
/// of their own.
#[derive(Debug, Clone)]
pub struct AdjacencyMap<N>
where
    N: Eq + Hash + Clone + Debug,
{
    /// Outgoing edges for each node: node -> [(target, cost)]
    outgoing_edges: HashMap<N, Vec<(N, Cost)>>,
}

impl<N> AdjacencyMap<N>
where
    N: Eq + Hash + Clone + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyMap {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new graph with room for the specified number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyMap {
            outgoing_edges: HashMap::with_capacity(nodes),
        }
    }

    /// Registers `node` with the given outgoing edges, replacing any
    /// previous record. Later duplicates of the same target win.
    ///
    /// Returns the replaced edge list, if there was one.
    pub fn set_neighbours<I>(&mut self, node: N, edges: I) -> Option<Vec<(N, Cost)>>
    where
        I: IntoIterator<Item = (N, Cost)>,
    {
        let edges = dedup_last_wins(edges);
        self.outgoing_edges.insert(node, edges)
    }

    /// Removes a node's adjacency record. Edges pointing at it from other
    /// nodes are left in place.
    pub fn remove_node(&mut self, node: &N) -> Option<Vec<(N, Cost)>> {
        self.outgoing_edges.remove(node)
    }

    /// Returns the outgoing edges of a node, if it has a record
    pub fn neighbours(&self, node: &N) -> Option<&[(N, Cost)]> {
        self.outgoing_edges.get(node).map(Vec::as_slice)
    }

    /// Iterates over every node that has an adjacency record
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.outgoing_edges.keys()
    }

    /// Iterates over every `(node, edges)` record
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[(N, Cost)])> + '_ {
        self.outgoing_edges
            .iter()
            .map(|(node, edges)| (node, edges.as_slice()))
    }

    /// Returns true if no node has been registered
    pub fn is_empty(&self) -> bool {
        self.outgoing_edges.is_empty()
    }
}

impl<N> Default for AdjacencyMap<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Graph<N> for AdjacencyMap<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn node_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, Cost)> + 'a> {
        if let Some(edges) = self.outgoing_edges.get(node) {
            Box::new(edges.iter().map(|(target, cost)| (target, *cost)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.outgoing_edges.contains_key(node)
    }

    fn edge_cost(&self, from: &N, to: &N) -> Option<Cost> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, cost)| *cost)
    }
}

/// Collapses repeated targets, keeping the first position and the last cost.
fn dedup_last_wins<N, I>(edges: I) -> Vec<(N, Cost)>
where
    N: Eq + Hash + Clone,
    I: IntoIterator<Item = (N, Cost)>,
{
    let mut positions: HashMap<N, usize> = HashMap::new();
    let mut out: Vec<(N, Cost)> = Vec::new();

    for (target, cost) in edges {
        match positions.get(&target) {
            Some(&idx) => out[idx].1 = cost,
            None => {
                positions.insert(target.clone(), out.len());
                out.push((target, cost));
            }
        }
    }

    out
}
