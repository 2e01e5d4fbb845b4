//! Weighted shortest paths (Dijkstra).
//!
//! Edge weights are transition counts, so a "short" path here follows rare
//! transitions. Weights are non-negative by construction.

use crate::{Error, Result, WordGraph};
use petgraph::graph::NodeIndex;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

/// A path through the graph with its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Words from source to destination, inclusive.
    pub words: Vec<String>,
    /// Sum of edge weights along the path.
    pub weight: u64,
}

impl Path {
    /// Destination word.
    pub fn target(&self) -> &str {
        self.words.last().map_or("", String::as_str)
    }

    /// Number of edges.
    pub fn hops(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" -> "))
    }
}

/// Frontier entry. Ties on cost resolve by node index (first-seen word).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    cost: u64,
    node: NodeIndex,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessor links from one source.
#[derive(Debug)]
struct ShortestPathTree<'g> {
    graph: &'g WordGraph,
    source: NodeIndex,
    dist: Vec<Option<u64>>,
    prev: Vec<Option<NodeIndex>>,
}

impl<'g> ShortestPathTree<'g> {
    /// Run Dijkstra from `source`, stopping early once `target` is settled.
    fn compute(graph: &'g WordGraph, source: NodeIndex, target: Option<NodeIndex>) -> Self {
        let n = graph.word_count();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut frontier = BinaryHeap::new();

        dist[source.index()] = Some(0);
        frontier.push(Reverse(State {
            cost: 0,
            node: source,
        }));

        while let Some(Reverse(State { cost, node })) = frontier.pop() {
            if settled[node.index()] {
                continue;
            }
            settled[node.index()] = true;
            if Some(node) == target {
                break;
            }

            for (next, weight) in graph.successors_of(node) {
                if settled[next.index()] {
                    continue;
                }
                let candidate = cost + u64::from(weight);
                if dist[next.index()].is_none_or(|d| candidate < d) {
                    dist[next.index()] = Some(candidate);
                    prev[next.index()] = Some(node);
                    frontier.push(Reverse(State {
                        cost: candidate,
                        node: next,
                    }));
                }
            }
        }

        Self {
            graph,
            source,
            dist,
            prev,
        }
    }

    fn distance(&self, node: NodeIndex) -> Option<u64> {
        self.dist[node.index()]
    }

    /// Walk predecessor links back from `target` to the source.
    fn path_to(&self, target: NodeIndex) -> Result<Path> {
        let weight = self.distance(target).ok_or_else(|| {
            Error::Internal(format!(
                "no distance recorded for \"{}\"",
                self.graph.word(target)
            ))
        })?;

        let mut chain = vec![target];
        let mut at = target;
        while at != self.source {
            at = self.prev[at.index()].ok_or_else(|| {
                Error::Internal(format!(
                    "predecessor chain from \"{}\" never reaches \"{}\"",
                    self.graph.word(target),
                    self.graph.word(self.source)
                ))
            })?;
            chain.push(at);
            if chain.len() > self.dist.len() {
                return Err(Error::Internal("predecessor chain contains a cycle".into()));
            }
        }
        chain.reverse();

        Ok(Path {
            words: chain
                .into_iter()
                .map(|idx| self.graph.word(idx).to_string())
                .collect(),
            weight,
        })
    }
}

fn lookup(graph: &WordGraph, words: &[&str]) -> Result<Vec<NodeIndex>> {
    let mut missing: Vec<String> = Vec::new();
    for &word in words {
        if !graph.contains(word) && !missing.iter().any(|m| m == word) {
            missing.push(word.to_string());
        }
    }
    if !missing.is_empty() {
        return Err(Error::WordNotFound(missing));
    }
    Ok(words.iter().filter_map(|w| graph.node_index(w)).collect())
}

/// Shortest path from `start` to `end`.
///
/// Words are lowercased before lookup. Fails with [`Error::WordNotFound`]
/// when either word is absent, and with [`Error::NoPathFound`] when both
/// exist but `end` is unreachable.
///
/// ```rust
/// use wordweb_core::{algo::path::shortest_path, WordGraph};
///
/// let mut g = WordGraph::new();
/// g.add_transition("a", "b");
/// g.add_transition("b", "c");
/// for _ in 0..5 { g.add_transition("a", "c"); }
///
/// let path = shortest_path(&g, "a", "c").unwrap();
/// assert_eq!(path.words, ["a", "b", "c"]);
/// assert_eq!(path.weight, 2);
/// ```
pub fn shortest_path(graph: &WordGraph, start: &str, end: &str) -> Result<Path> {
    let start = start.trim().to_lowercase();
    let end = end.trim().to_lowercase();
    let idx = lookup(graph, &[start.as_str(), end.as_str()])?;
    let (source, target) = (idx[0], idx[1]);

    let tree = ShortestPathTree::compute(graph, source, Some(target));
    if tree.distance(target).is_none() {
        return Err(Error::NoPathFound {
            from: start,
            to: end,
        });
    }
    tree.path_to(target)
}

/// Shortest paths from `start` to every other reachable word.
///
/// Paths are sorted by destination word. An empty vector means no other
/// word is reachable.
pub fn all_shortest_paths(graph: &WordGraph, start: &str) -> Result<Vec<Path>> {
    let start = start.trim().to_lowercase();
    let source = lookup(graph, &[start.as_str()])?[0];
    let tree = ShortestPathTree::compute(graph, source, None);

    let mut targets: Vec<NodeIndex> = graph
        .as_petgraph()
        .node_indices()
        .filter(|&idx| idx != source && tree.distance(idx).is_some())
        .collect();
    targets.sort_by(|a, b| graph.word(*a).cmp(graph.word(*b)));

    targets.into_iter().map(|t| tree.path_to(t)).collect()
}
