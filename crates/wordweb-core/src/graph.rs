use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A weighted directed word-adjacency graph.
///
/// Uses petgraph's directed graph internally. An edge `a -> b` carries the
/// number of times `b` immediately followed `a` in the ingested text; there
/// is at most one edge per ordered pair.
///
/// Node and edge indices are handed out in insertion order and nothing is
/// ever removed, so iteration by index reproduces first-seen order.
///
/// # Example
///
/// ```rust
/// use wordweb_core::WordGraph;
///
/// let mut g = WordGraph::new();
/// g.add_transition("a", "b");
/// g.add_transition("b", "a");
/// g.add_transition("a", "b");
///
/// assert_eq!(g.word_count(), 2);
/// assert_eq!(g.edge_weight("a", "b"), Some(2));
/// assert_eq!(g.edge_weight("b", "a"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// The underlying directed graph.
    graph: DiGraph<String, u32>,

    /// Map from word to node index.
    word_index: HashMap<String, NodeIndex>,
}

impl WordGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with estimated capacity.
    pub fn with_capacity(words: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(words, edges),
            word_index: HashMap::with_capacity(words),
        }
    }

    /// Add a word node if it is not present yet.
    pub fn add_word(&mut self, word: &str) -> NodeIndex {
        if let Some(&idx) = self.word_index.get(word) {
            return idx;
        }

        let idx = self.graph.add_node(word.to_string());
        self.word_index.insert(word.to_string(), idx);
        idx
    }

    /// Record that `target` followed `source` once more.
    ///
    /// Creates both nodes and the edge (weight 1) on first sight, otherwise
    /// increments the existing weight. Returns the new weight.
    pub fn add_transition(&mut self, source: &str, target: &str) -> u32 {
        let src = self.add_word(source);
        let dst = self.add_word(target);

        match self.graph.find_edge(src, dst) {
            Some(edge) => {
                let weight = &mut self.graph[edge];
                *weight += 1;
                *weight
            }
            None => {
                self.graph.add_edge(src, dst, 1);
                1
            }
        }
    }

    /// Check whether `word` is a node.
    pub fn contains(&self, word: &str) -> bool {
        self.word_index.contains_key(word)
    }

    /// Node index of `word`.
    pub fn node_index(&self, word: &str) -> Option<NodeIndex> {
        self.word_index.get(word).copied()
    }

    /// Word stored at `idx`.
    pub fn word(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Weight of `source -> target`, if the edge exists.
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<u32> {
        let src = self.node_index(source)?;
        let dst = self.node_index(target)?;
        self.graph.find_edge(src, dst).map(|e| self.graph[e])
    }

    /// Check if an edge exists between two words.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edge_weight(source, target).is_some()
    }

    /// Outgoing `(target, weight)` pairs of a node, in insertion order.
    pub fn successors_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, u32)> {
        let mut out: Vec<(EdgeIndex, NodeIndex, u32)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), e.target(), *e.weight()))
            .collect();
        out.sort_unstable_by_key(|(edge, _, _)| *edge);
        out.into_iter().map(|(_, target, w)| (target, w)).collect()
    }

    /// Outgoing `(target, weight)` pairs of `word`, in insertion order.
    ///
    /// Empty if the word is unknown or dangling.
    pub fn successors(&self, word: &str) -> Vec<(&str, u32)> {
        match self.node_index(word) {
            Some(idx) => self
                .successors_of(idx)
                .into_iter()
                .map(|(t, w)| (self.word(t), w))
                .collect(),
            None => vec![],
        }
    }

    /// Words with an edge into `word`.
    pub fn predecessors(&self, word: &str) -> Vec<&str> {
        match self.node_index(word) {
            Some(idx) => self
                .graph
                .neighbors_directed(idx, Direction::Incoming)
                .map(|n| self.word(n))
                .collect(),
            None => vec![],
        }
    }

    /// Out-degree of `word` (distinct successors). 0 for unknown words.
    pub fn out_degree(&self, word: &str) -> usize {
        match self.node_index(word) {
            Some(idx) => self.graph.edges_directed(idx, Direction::Outgoing).count(),
            None => 0,
        }
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Iterate over words in first-seen order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Iterate over `(source, target, weight)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
                *e.weight(),
            )
        })
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &DiGraph<String, u32> {
        &self.graph
    }
}

impl AsRef<WordGraph> for WordGraph {
    fn as_ref(&self) -> &WordGraph {
        self
    }
}

/// Statistics about a word graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordGraphStats {
    /// Number of words.
    pub word_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
    /// Sum of all edge weights (adjacent token pairs).
    pub total_weight: u64,
    /// Words with no outgoing edge.
    pub dangling_count: usize,
    /// Average out-degree.
    pub avg_out_degree: f64,
}

impl WordGraph {
    /// Compute statistics about the graph.
    pub fn stats(&self) -> WordGraphStats {
        let word_count = self.word_count();
        let edge_count = self.edge_count();
        let total_weight = self.graph.edge_weights().map(|&w| u64::from(w)).sum();
        let dangling_count = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .count();

        let avg_out_degree = if word_count > 0 {
            edge_count as f64 / word_count as f64
        } else {
            0.0
        };

        WordGraphStats {
            word_count,
            edge_count,
            total_weight,
            dangling_count,
            avg_out_degree,
        }
    }
}
