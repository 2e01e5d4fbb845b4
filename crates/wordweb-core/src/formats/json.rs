//! JSON interchange document.
//!
//! A serde-friendly snapshot of a corpus for downstream tooling. Node and
//! edge order follow insertion order.

use crate::builder::Corpus;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A word node in the interchange document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNode {
    /// The word.
    pub word: String,
    /// Occurrences in the source text.
    pub frequency: u64,
}

/// A transition edge in the interchange document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEdge {
    /// Preceding word.
    pub source: String,
    /// Following word.
    pub target: String,
    /// Number of times `target` followed `source`.
    pub weight: u32,
}

/// A whole corpus as nodes plus edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Words with their frequencies.
    pub nodes: Vec<WordNode>,
    /// Weighted transitions.
    pub edges: Vec<WordEdge>,
}

impl GraphDocument {
    /// Snapshot a corpus.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let graph = &corpus.graph;
        let nodes = graph
            .words()
            .map(|word| WordNode {
                word: word.to_string(),
                frequency: corpus.frequencies.count(word),
            })
            .collect();
        let edges = graph
            .edges()
            .map(|(source, target, weight)| WordEdge {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            })
            .collect();
        Self { nodes, edges }
    }
}

/// JSON format handler.
pub struct Json;

impl Json {
    /// Write the corpus as pretty-printed JSON.
    pub fn write<W: Write>(corpus: &Corpus, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &GraphDocument::from_corpus(corpus))?;
        Ok(())
    }

    /// Convert to string.
    pub fn to_string(corpus: &Corpus) -> Result<String> {
        Ok(serde_json::to_string_pretty(&GraphDocument::from_corpus(
            corpus,
        ))?)
    }

    /// Parse a document back.
    pub fn from_str(s: &str) -> Result<GraphDocument> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;

    #[test]
    fn test_document_shape() {
        let corpus = GraphBuilder::from_text("a b a b").unwrap();
        let doc = GraphDocument::from_corpus(&corpus);
        assert_eq!(
            doc.nodes,
            [
                WordNode {
                    word: "a".into(),
                    frequency: 2
                },
                WordNode {
                    word: "b".into(),
                    frequency: 2
                },
            ]
        );
        assert_eq!(doc.edges.len(), 2);
        assert_eq!(doc.edges[0].source, "a");
        assert_eq!(doc.edges[0].weight, 2);
    }

    #[test]
    fn test_json_fields() {
        let corpus = GraphBuilder::from_text("hello world").unwrap();
        let json = Json::to_string(&corpus).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nodes"][1]["word"], "world");
        assert_eq!(value["edges"][0]["target"], "world");
        assert_eq!(value["edges"][0]["weight"], 1);

        let doc = Json::from_str(&json).unwrap();
        assert_eq!(doc, GraphDocument::from_corpus(&corpus));
    }
}
