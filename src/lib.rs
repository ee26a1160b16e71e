//! Dijkstra Graph - shortest paths between named nodes
//!
//! Build a directed graph whose nodes are identified by name and whose edges
//! carry non-negative costs, then ask for the cheapest route between any two
//! nodes. Each query runs Dijkstra's algorithm from scratch over the current
//! graph, driven by an indexed priority frontier.
//!
//! ```
//! use dijkstra_graph::{PathFinder, PathOptions, PathOutput};
//!
//! let mut finder = PathFinder::new();
//! finder.add_node("A", [("B", 1.0), ("C", 4.0)]).unwrap();
//! finder.add_node("B", [("C", 1.0)]).unwrap();
//!
//! let out = finder.path(&"A", &"C", &PathOptions::default().with_cost(true)).unwrap();
//! match out {
//!     PathOutput::WithCost(route) => {
//!         assert_eq!(route.path, Some(vec!["A", "B", "C"]));
//!         assert_eq!(route.cost, 2.0);
//!     }
//!     PathOutput::Nodes(_) => unreachable!(),
//! }
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    path_finder::PathFinder, PathOptions, PathOutput, Route, SearchState,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyMap, Cost, Graph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid argument type: expected {expected}, found {found}")]
    InvalidArgumentType {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid cost {value}: costs must be finite non-negative numbers")]
    InvalidCost { value: String },

    #[error("Invalid frontier priority: {0}")]
    InvalidPriority(String),

    #[error("Cannot extract from an empty frontier")]
    EmptyFrontier,

    #[error("Invalid path options: {0}")]
    InvalidOptions(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Short description of a JSON value's kind, used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
