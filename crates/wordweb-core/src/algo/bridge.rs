//! Bridge words: `w` such that `a -> w` and `w -> b` are both edges.

use crate::{Error, Result, WordGraph};
use std::fmt;

/// Successful bridge-word query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeWords {
    /// Source word (normalized).
    pub from: String,
    /// Target word (normalized).
    pub to: String,
    /// Bridges in the order of `from`'s outgoing edges. Never empty.
    pub words: Vec<String>,
}

impl fmt::Display for BridgeWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The bridge words from \"{}\" to \"{}\" are: ",
            self.from, self.to
        )?;
        let n = self.words.len();
        for (i, word) in self.words.iter().enumerate() {
            f.write_str(word)?;
            if n > 1 && i + 2 < n {
                f.write_str(", ")?;
            } else if n > 1 && i + 2 == n {
                f.write_str(", and ")?;
            }
        }
        f.write_str(".")
    }
}

/// Query the bridge words from `a` to `b`.
///
/// Both words are lowercased before lookup. Fails with
/// [`Error::BothWordsMissing`], [`Error::WordMissing`], or
/// [`Error::NoBridgeWords`].
pub fn bridge_words(graph: &WordGraph, a: &str, b: &str) -> Result<BridgeWords> {
    let from = a.trim().to_lowercase();
    let to = b.trim().to_lowercase();

    match (graph.contains(&from), graph.contains(&to)) {
        (false, false) => {
            return Err(Error::BothWordsMissing {
                first: from,
                second: to,
            })
        }
        (false, true) => return Err(Error::WordMissing(from)),
        (true, false) => return Err(Error::WordMissing(to)),
        (true, true) => {}
    }

    let words: Vec<String> = find_bridges(graph, &from, &to)
        .into_iter()
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(Error::NoBridgeWords { from, to });
    }

    Ok(BridgeWords { from, to, words })
}

/// Bridge words between two normalized words; empty if either is missing.
pub(crate) fn find_bridges<'g>(graph: &'g WordGraph, from: &str, to: &str) -> Vec<&'g str> {
    if !graph.contains(to) {
        return vec![];
    }
    graph
        .successors(from)
        .into_iter()
        .filter(|(candidate, _)| graph.has_edge(candidate, to))
        .map(|(candidate, _)| candidate)
        .collect()
}
