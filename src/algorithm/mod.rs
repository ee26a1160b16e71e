pub mod dijkstra;
pub mod path_finder;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{json_kind, Error};

pub use dijkstra::{Dijkstra, FoundPath, SearchState, ShortestPathTree};

/// Output shaping for [`path_finder::PathFinder::path`]
///
/// All flags default to `false`: the full path, start first, without its
/// cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathOptions {
    /// Leave out both the start and the goal
    pub trim: bool,
    /// Return the path goal first
    pub reverse: bool,
    /// Return a [`Route`] with the total cost instead of the bare path
    pub cost: bool,
}

impl PathOptions {
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_cost(mut self, cost: bool) -> Self {
        self.cost = cost;
        self
    }
}

impl TryFrom<&Value> for PathOptions {
    type Error = Error;

    /// `null` means defaults. Anything else must be an object whose keys are
    /// a subset of `trim`, `reverse` and `cost`, each a boolean.
    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(PathOptions::default()),
            Value::Object(_) => PathOptions::deserialize(value)
                .map_err(|e| Error::InvalidOptions(e.to_string())),
            other => Err(Error::InvalidOptions(format!(
                "expected an object, found {}",
                json_kind(other)
            ))),
        }
    }
}

/// A path together with its total cost
///
/// `path` is `None` and `cost` is 0 when the goal is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<N> {
    pub path: Option<Vec<N>>,
    pub cost: f64,
}

/// Result of a path query, shaped by [`PathOptions`]
///
/// Serializes to a bare array (or `null`) for `Nodes` and to
/// `{"path": ..., "cost": ...}` for `WithCost`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathOutput<N> {
    Nodes(Option<Vec<N>>),
    WithCost(Route<N>),
}

impl<N> PathOutput<N> {
    /// The node sequence, whichever shape was requested
    pub fn nodes(&self) -> Option<&[N]> {
        match self {
            PathOutput::Nodes(path) => path.as_deref(),
            PathOutput::WithCost(route) => route.path.as_deref(),
        }
    }

    /// The total cost, when it was requested
    pub fn cost(&self) -> Option<f64> {
        match self {
            PathOutput::Nodes(_) => None,
            PathOutput::WithCost(route) => Some(route.cost),
        }
    }

    /// Returns true if no path was found
    pub fn is_none(&self) -> bool {
        self.nodes().is_none()
    }
}

/// Applies `options` to a raw search result
pub(crate) fn shape<N>(found: Option<FoundPath<N>>, options: &PathOptions) -> PathOutput<N> {
    let cost = found.as_ref().map_or(0.0, |f| f.cost);
    let path = found.map(|f| {
        let mut nodes = f.nodes;
        if options.trim {
            if nodes.len() <= 2 {
                nodes.clear();
            } else {
                nodes.pop();
                nodes.remove(0);
            }
        }
        if options.reverse {
            nodes.reverse();
        }
        nodes
    });

    if options.cost {
        PathOutput::WithCost(Route { path, cost })
    } else {
        PathOutput::Nodes(path)
    }
}
