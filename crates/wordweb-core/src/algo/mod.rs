//! Queries and analyses over a word graph.
//!
//! All algorithms borrow the graph immutably; the ones that need
//! randomness take the RNG as a parameter.

/// Bridge words between two words.
pub mod bridge;

/// Text augmentation with bridge words.
pub mod augment;

/// Weighted shortest paths (Dijkstra).
pub mod path;

/// PageRank centrality.
pub mod pagerank;

/// Cancellable random walks.
pub mod walk;
