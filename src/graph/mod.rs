pub mod adjacency;
pub mod cost;
pub mod generators;
pub mod nested;
pub mod traits;

pub use adjacency::AdjacencyMap;
pub use cost::Cost;
pub use traits::Graph;
