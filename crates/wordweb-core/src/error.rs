//! Error types for wordweb.

use thiserror::Error;

/// Wordweb error type.
///
/// Query outcomes such as [`Error::NoBridgeWords`] and [`Error::NoPathFound`]
/// are well-defined negative results rather than faults; callers that want to
/// treat them as ordinary output can check [`Error::is_negative_result`].
#[derive(Debug, Error)]
pub enum Error {
    /// Normalization left no usable tokens.
    #[error("no words found in the input text")]
    EmptyInput,

    /// Exactly one of the two queried words is absent from the graph.
    #[error("No \"{0}\" in the graph!")]
    WordMissing(String),

    /// Neither of the two queried words is in the graph.
    #[error("No \"{first}\" or \"{second}\" in the graph!")]
    BothWordsMissing {
        /// First queried word.
        first: String,
        /// Second queried word.
        second: String,
    },

    /// Both words exist but nothing bridges them.
    #[error("No bridge words from \"{from}\" to \"{to}\"!")]
    NoBridgeWords {
        /// Source word.
        from: String,
        /// Target word.
        to: String,
    },

    /// One or more path endpoints are absent from the graph.
    #[error("Word {} not found in the graph.", quote_all(.0))]
    WordNotFound(Vec<String>),

    /// Both endpoints exist but the destination is unreachable.
    #[error("No path found between \"{from}\" and \"{to}\".")]
    NoPathFound {
        /// Path source.
        from: String,
        /// Path destination.
        to: String,
    },

    /// Operation needs at least one node.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// A session query ran before any text was loaded.
    #[error("no graph loaded; load a text first")]
    NoGraphLoaded,

    /// Broken internal invariant (a bug, not a user error).
    #[error("internal inconsistency: {0}")]
    Internal(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for outcomes that mean "the query was valid, the answer is empty".
    pub fn is_negative_result(&self) -> bool {
        matches!(self, Self::NoBridgeWords { .. } | Self::NoPathFound { .. })
    }
}

fn quote_all(words: &[String]) -> String {
    words
        .iter()
        .map(|w| format!("\"{w}\""))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
