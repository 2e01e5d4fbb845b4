//! Graph construction from a token stream.

use crate::tokenize::{self, FrequencyTable, TokenStream};
use crate::{Result, WordGraph};
use tracing::{debug, warn};

/// A loaded document: its word graph plus the term frequencies that seed
/// PageRank. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Word-adjacency graph.
    pub graph: WordGraph,
    /// Occurrence count of every word in the document.
    pub frequencies: FrequencyTable,
    /// Number of tokens ingested.
    pub token_count: usize,
}

impl AsRef<WordGraph> for Corpus {
    fn as_ref(&self) -> &WordGraph {
        &self.graph
    }
}

/// Tokenize `text` and build its corpus.
///
/// Shorthand for [`GraphBuilder::from_text`].
pub fn build_corpus(text: &str) -> Result<Corpus> {
    GraphBuilder::from_text(text)
}

/// Builds a [`Corpus`] from text or tokens.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: WordGraph,
    frequencies: FrequencyTable,
    token_count: usize,
    last: Option<String>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and build its corpus in one go.
    ///
    /// Fails with [`crate::Error::EmptyInput`] if the text has no words.
    pub fn from_text(text: &str) -> Result<Corpus> {
        let stream = tokenize::tokenize(text)?;
        Ok(Self::from_tokens(stream))
    }

    /// Build a corpus from an already tokenized stream.
    pub fn from_tokens(stream: TokenStream) -> Corpus {
        let mut builder = Self {
            graph: WordGraph::with_capacity(stream.frequencies.len(), stream.len()),
            ..Self::default()
        };
        for token in &stream.tokens {
            builder.push(token);
        }
        debug_assert_eq!(builder.frequencies, stream.frequencies);
        builder.finish()
    }

    /// Append one token, linking it to the previous one.
    pub fn push(&mut self, token: &str) {
        match self.last.as_deref() {
            Some(prev) => {
                self.graph.add_transition(prev, token);
            }
            None => {
                self.graph.add_word(token);
            }
        }
        self.frequencies.record(token);
        self.token_count += 1;
        self.last = Some(token.to_string());
    }

    /// Finalize the corpus.
    pub fn finish(self) -> Corpus {
        if self.token_count < 2 {
            warn!(
                tokens = self.token_count,
                "not enough words in the text to form edges"
            );
        }
        debug!(
            words = self.graph.word_count(),
            edges = self.graph.edge_count(),
            tokens = self.token_count,
            "built word graph"
        );

        Corpus {
            graph: self.graph,
            frequencies: self.frequencies,
            token_count: self.token_count,
        }
    }
}
