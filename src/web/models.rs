use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::algorithm::path_finder::PathFinder;

/// Body of `POST /api/graphs/:id/nodes`
#[derive(Debug, Deserialize)]
pub struct AddNodeRequest {
    pub name: String,
    /// Nested neighbour specification, same shape as one node of the
    /// construction input
    pub neighbors: Value,
}

/// Body of `POST /api/graphs/:id/path`
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub start: String,
    pub goal: String,
    /// Raw options object; validated into `PathOptions` by the handler
    #[serde(default)]
    pub options: Value,
}

/// Summary of a stored graph
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub node_count: usize,
    pub edge_count: usize,
}

/// A stored graph with its full adjacency, for `GET /api/graphs/:id`
#[derive(Debug, Clone, Serialize)]
pub struct GraphView {
    #[serde(flatten)]
    pub summary: SessionSummary,
    pub adjacency: BTreeMap<String, BTreeMap<String, f64>>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub sessions: usize,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<Value>,
}

/// Session holding one graph
///
/// Path queries take the read lock and mutations the write lock, so a graph
/// never changes while a query runs on it.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub graph: RwLock<PathFinder<String>>,
}

impl Session {
    pub fn new(graph: PathFinder<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            graph: RwLock::new(graph),
        }
    }

    pub fn summarize(&self, graph: &PathFinder<String>) -> SessionSummary {
        SessionSummary {
            id: self.id,
            created_at: self.created_at,
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
        }
    }

    pub fn view(&self, graph: &PathFinder<String>) -> GraphView {
        let adjacency = graph
            .graph()
            .iter()
            .map(|(node, edges)| {
                let targets = edges
                    .iter()
                    .map(|(target, cost)| (target.clone(), cost.value()))
                    .collect();
                (node.clone(), targets)
            })
            .collect();

        GraphView {
            summary: self.summarize(graph),
            adjacency,
        }
    }
}
