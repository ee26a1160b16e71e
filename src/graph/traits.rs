use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Cost;

/// Trait representing a weighted directed graph of keyed nodes
///
/// This is the read-only view the shortest-path search works against.
pub trait Graph<N>: Debug
where
    N: Eq + Hash + Clone + Debug,
{
    /// Returns the number of nodes with an adjacency record
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a node
    ///
    /// Nodes without an adjacency record yield nothing.
    fn outgoing_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, Cost)> + 'a>;

    /// Returns true if the node has an adjacency record
    fn has_node(&self, node: &N) -> bool;

    /// Gets the cost of an edge if it exists
    fn edge_cost(&self, from: &N, to: &N) -> Option<Cost>;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_cost(from, to).is_some()
    }
}
