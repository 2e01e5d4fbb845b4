//! Sorted adjacency listing.
//!
//! ```text
//! Directed Graph (Node -> Target (Weight)):
//! a -> b(2), c(1)
//! c -> (No outgoing edges)
//! ```

use crate::{Result, WordGraph};
use std::io::Write;

/// Adjacency listing handler.
pub struct Adjacency;

impl Adjacency {
    /// Write one line per word, words and their targets sorted alphabetically.
    pub fn write<W: Write>(graph: &WordGraph, mut writer: W) -> Result<()> {
        if graph.is_empty() {
            writeln!(writer, "Graph is empty.")?;
            return Ok(());
        }

        writeln!(writer, "Directed Graph (Node -> Target (Weight)):")?;

        let mut words: Vec<&str> = graph.words().collect();
        words.sort_unstable();

        for word in words {
            let mut targets = graph.successors(word);
            if targets.is_empty() {
                writeln!(writer, "{word} -> (No outgoing edges)")?;
                continue;
            }
            targets.sort_unstable_by_key(|(t, _)| *t);
            let listed: Vec<String> = targets.iter().map(|(t, w)| format!("{t}({w})")).collect();
            writeln!(writer, "{word} -> {}", listed.join(", "))?;
        }
        Ok(())
    }

    /// Convert to string.
    pub fn to_string(graph: &WordGraph) -> Result<String> {
        let mut buf = Vec::new();
        Self::write(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}
