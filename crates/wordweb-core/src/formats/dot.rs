//! Graphviz DOT format.
//!
//! Nodes are declared first, then edges, both in insertion order. Edge
//! labels carry the transition count.

use crate::{Result, WordGraph};
use std::collections::HashSet;
use std::io::Write;

const HIGHLIGHT: &str = "color=red, penwidth=2.0";

/// DOT format handler.
pub struct Dot;

impl Dot {
    /// Write `graph` as a DOT digraph.
    ///
    /// Every word of `highlight` is drawn in red, as is every edge between
    /// consecutive words of it.
    pub fn write<W: Write>(
        graph: &WordGraph,
        highlight: Option<&[String]>,
        mut writer: W,
    ) -> Result<()> {
        let path = highlight.unwrap_or_default();
        let path_nodes: HashSet<&str> = path.iter().map(String::as_str).collect();
        let path_edges: HashSet<(&str, &str)> = path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect();

        writeln!(writer, "digraph G {{")?;
        writeln!(writer, "  node [shape=box, style=rounded];")?;

        for word in graph.words() {
            if path_nodes.contains(word) {
                writeln!(writer, "  \"{word}\" [{HIGHLIGHT}];")?;
            } else {
                writeln!(writer, "  \"{word}\";")?;
            }
        }

        for (source, target, weight) in graph.edges() {
            write!(writer, "  \"{source}\" -> \"{target}\" [label=\"{weight}\"")?;
            if path_edges.contains(&(source, target)) {
                write!(writer, ", {HIGHLIGHT}")?;
            }
            writeln!(writer, "];")?;
        }

        writeln!(writer, "}}")?;
        Ok(())
    }

    /// Convert to string.
    pub fn to_string(graph: &WordGraph, highlight: Option<&[String]>) -> Result<String> {
        let mut buf = Vec::new();
        Self::write(graph, highlight, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}
