//! Text export formats for word graphs.
//!
//! - [`Dot`] - Graphviz DOT, optionally highlighting a path
//! - [`Adjacency`] - Sorted human-readable adjacency listing
//! - [`Json`] - Serde interchange document

mod adjacency;
mod dot;
mod json;

pub use adjacency::Adjacency;
pub use dot::Dot;
pub use json::{GraphDocument, Json, WordEdge, WordNode};
