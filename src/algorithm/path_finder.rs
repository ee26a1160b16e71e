use log::debug;
use num_traits::ToPrimitive;
use rayon::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::dijkstra::{Dijkstra, FoundPath};
use crate::algorithm::{shape, PathOptions, PathOutput};
use crate::graph::nested::{flatten_neighbours, parse_graph};
use crate::graph::{AdjacencyMap, Cost, Graph};
use crate::Result;

/// A graph of named nodes that answers shortest-path queries
///
/// The finder owns its graph. Queries take `&self` and build their own
/// search state, so any number of them can run at once against an
/// unchanging graph; `add_node` and `remove_node` take `&mut self` and so
/// can never overlap a query.
#[derive(Debug, Clone)]
pub struct PathFinder<N = String>
where
    N: Eq + Hash + Clone + Debug,
{
    graph: AdjacencyMap<N>,
    algorithm: Dijkstra,
}

impl<N> PathFinder<N>
where
    N: Eq + Hash + Clone + Debug,
{
    /// Creates a finder over an empty graph
    pub fn new() -> Self {
        Self::from_graph(AdjacencyMap::new())
    }

    /// Creates a finder with room for `nodes` adjacency records
    pub fn with_capacity(nodes: usize) -> Self {
        Self::from_graph(AdjacencyMap::with_capacity(nodes))
    }

    /// Wraps an already built graph
    pub fn from_graph(graph: AdjacencyMap<N>) -> Self {
        PathFinder {
            graph,
            algorithm: Dijkstra::new(),
        }
    }

    /// Registers `node` with the given outgoing edges, replacing whatever
    /// edges it had. Repeated targets keep the last cost.
    ///
    /// Every cost must be a finite non-negative number; otherwise this fails
    /// with [`Error::InvalidCost`](crate::Error::InvalidCost) and the graph
    /// is left as it was.
    pub fn add_node<I, T>(&mut self, node: N, neighbours: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, T)>,
        T: ToPrimitive + Debug,
    {
        let edges = neighbours
            .into_iter()
            .map(|(target, cost)| -> Result<(N, Cost)> { Ok((target, Cost::from_num(cost)?)) })
            .collect::<Result<Vec<_>>>()?;
        self.insert_edges(node, edges);
        Ok(())
    }

    /// Removes a node's outgoing edges. Edges into it stay, so it remains
    /// reachable as a sink.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let removed = self.graph.remove_node(node).is_some();
        if removed {
            debug!("Removed node {:?}", node);
        }
        removed
    }

    /// The underlying graph
    pub fn graph(&self) -> &AdjacencyMap<N> {
        &self.graph
    }

    /// Number of nodes with an adjacency record
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if `node` has an adjacency record
    pub fn contains_node(&self, node: &N) -> bool {
        self.graph.has_node(node)
    }

    /// Outgoing edges of `node`, if it has a record
    pub fn neighbours(&self, node: &N) -> Option<&[(N, Cost)]> {
        self.graph.neighbours(node)
    }

    /// The unshaped minimum-cost path from `start` to `goal`, start first
    pub fn shortest_path(&self, start: &N, goal: &N) -> Result<Option<FoundPath<N>>> {
        self.algorithm.shortest_path(&self.graph, start, goal)
    }

    /// Finds the minimum-cost path from `start` to `goal`, shaped by
    /// `options`.
    ///
    /// An unreachable goal or an empty graph is not an error: the result is
    /// `Nodes(None)`, or a [`Route`](crate::Route) with no path and cost 0
    /// when the cost was requested. `path(a, a)` is `[a]` at cost 0 on any
    /// non-empty graph.
    pub fn path(&self, start: &N, goal: &N, options: &PathOptions) -> Result<PathOutput<N>> {
        let found = self.shortest_path(start, goal)?;
        Ok(shape(found, options))
    }

    /// Minimum cost from `start` to every node it can reach, `start`
    /// included at cost 0 (unless the graph is empty)
    pub fn distances(&self, start: &N) -> Result<HashMap<N, f64>> {
        Ok(self
            .algorithm
            .compute_shortest_paths(&self.graph, start)?
            .distances)
    }

    /// Answers several independent queries against the current graph in
    /// parallel. Results come back in query order.
    pub fn paths(&self, queries: &[(N, N)], options: &PathOptions) -> Result<Vec<PathOutput<N>>>
    where
        N: Send + Sync,
    {
        queries
            .par_iter()
            .map(|(start, goal)| self.path(start, goal, options))
            .collect()
    }

    fn insert_edges(&mut self, node: N, edges: Vec<(N, Cost)>) {
        debug!("Set node {:?} with {} outgoing edges", node, edges.len());
        self.graph.set_neighbours(node, edges);
    }
}

impl PathFinder<String> {
    /// Builds a finder from nested graph data such as
    /// `{"A": {"B": 1, "C": 4}, "B": {"C": 1}}`.
    ///
    /// `null` gives an empty graph. A non-object where nodes or neighbour
    /// lists are expected fails with
    /// [`Error::InvalidArgumentType`](crate::Error::InvalidArgumentType);
    /// leaves that are not valid costs fail with
    /// [`Error::InvalidCost`](crate::Error::InvalidCost).
    pub fn from_value(value: &Value) -> Result<Self> {
        let records = parse_graph(value)?;
        let mut finder = Self::with_capacity(records.len());
        for (node, edges) in records {
            finder.insert_edges(node, edges);
        }
        Ok(finder)
    }

    /// Like [`add_node`](Self::add_node), taking a raw nested neighbour
    /// specification. Nested objects are groups whose entries are all
    /// edges of `node`.
    pub fn add_node_value(&mut self, node: impl Into<String>, neighbours: &Value) -> Result<()> {
        let edges = flatten_neighbours(neighbours)?;
        self.insert_edges(node.into(), edges);
        Ok(())
    }
}

impl<N> Default for PathFinder<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> FromIterator<(N, Vec<(N, Cost)>)> for PathFinder<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = (N, Vec<(N, Cost)>)>>(iter: I) -> Self {
        let mut finder = Self::new();
        for (node, edges) in iter {
            finder.insert_edges(node, edges);
        }
        finder
    }
}
