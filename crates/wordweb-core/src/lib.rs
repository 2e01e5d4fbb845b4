// Allow minor clippy style warnings at crate level
// These are mostly style preferences, not bugs
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]

//! Weighted word-adjacency graphs built from plain text.
//!
//! Every distinct word of a document becomes a node; an edge `a -> b`
//! counts how often `b` immediately followed `a`. On top of that graph:
//!
//! - [`algo::bridge`] - Bridge words between two words
//! - [`algo::augment`] - Insert bridge words into new text
//! - [`algo::path`] - Weighted shortest paths (Dijkstra)
//! - [`algo::pagerank`] - PageRank seeded from term frequency
//! - [`algo::walk`] - Cancellable random walks
//!
//! # Export Formats
//!
//! - Graphviz DOT, with an optional highlighted path
//! - Sorted adjacency listing
//! - JSON interchange document
//!
//! # Example
//!
//! ```rust
//! use wordweb_core::{algo::bridge::bridge_words, GraphBuilder};
//!
//! let corpus = GraphBuilder::from_text("to seek out new life and new worlds").unwrap();
//!
//! assert_eq!(corpus.graph.edge_weight("out", "new"), Some(1));
//!
//! let bridges = bridge_words(&corpus.graph, "out", "life").unwrap();
//! assert_eq!(bridges.words, ["new"]);
//! ```

pub mod algo;
pub mod builder;
pub mod config;
mod error;
pub mod formats;
mod graph;
pub mod session;
pub mod tokenize;

pub use builder::{build_corpus, Corpus, GraphBuilder};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use graph::{WordGraph, WordGraphStats};
pub use session::Session;

// Re-export petgraph for advanced graph operations
pub use petgraph;
