//! Normalization of raw nested graph descriptions.
//!
//! Graph data often arrives as loosely shaped JSON:
//!
//! ```json
//! { "A": { "B": 1, "regional": { "C": 2, "D": 3.5 } }, "B": { "C": 1 } }
//! ```
//!
//! Every numeric leaf is an edge cost to the key it sits under. Every object
//! below the node level is a group whose entries are flattened into the same
//! adjacency record; the group key is only a label and never becomes a
//! target. So node `A` above has edges to `B`, `C` and `D`.

use serde_json::{Map, Value};

use crate::graph::Cost;
use crate::{json_kind, Error, Result};

/// One node with its flattened outgoing edges, in map iteration order
pub type NodeRecord = (String, Vec<(String, Cost)>);

/// Parses a whole graph description `{ node: { neighbour: cost | group } }`.
///
/// `null` is accepted as the empty graph. Nothing is returned unless every
/// node and every leaf validated.
pub fn parse_graph(value: &Value) -> Result<Vec<NodeRecord>> {
    let nodes = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(nodes) => nodes,
        other => {
            return Err(Error::InvalidArgumentType {
                expected: "object of nodes",
                found: json_kind(other).to_string(),
            })
        }
    };

    nodes
        .iter()
        .map(|(name, neighbours)| -> Result<NodeRecord> {
            Ok((name.clone(), flatten_neighbours(neighbours)?))
        })
        .collect()
}

/// Flattens one node's neighbour specification into `(target, cost)` pairs.
pub fn flatten_neighbours(value: &Value) -> Result<Vec<(String, Cost)>> {
    match value {
        Value::Object(entries) => {
            let mut edges = Vec::with_capacity(entries.len());
            flatten_into(entries, &mut edges)?;
            Ok(edges)
        }
        other => Err(Error::InvalidArgumentType {
            expected: "object of neighbours",
            found: json_kind(other).to_string(),
        }),
    }
}

fn flatten_into(entries: &Map<String, Value>, edges: &mut Vec<(String, Cost)>) -> Result<()> {
    for (key, value) in entries {
        match value {
            Value::Object(group) => flatten_into(group, edges)?,
            leaf => edges.push((key.clone(), Cost::from_json(leaf)?)),
        }
    }
    Ok(())
}
