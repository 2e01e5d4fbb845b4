//! Bridge-word text augmentation.

use super::bridge::find_bridges;
use crate::tokenize::normalize;
use crate::WordGraph;
use rand::seq::SliceRandom;
use rand::Rng;

/// Rewrite `text` by inserting a random bridge word between every adjacent
/// pair of words that has one.
///
/// The text is normalized the same way as ingested documents. Inputs with
/// fewer than two words come back unchanged. The first word is capitalized;
/// original words are never dropped or reordered.
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use wordweb_core::{algo::augment::generate_text, GraphBuilder};
///
/// let corpus = GraphBuilder::from_text("seek to explore strange new worlds").unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let out = generate_text(&corpus.graph, "Seek explore new worlds", &mut rng);
/// assert_eq!(out, "Seek to explore strange new worlds");
/// ```
pub fn generate_text<R: Rng + ?Sized>(graph: &WordGraph, text: &str, rng: &mut R) -> String {
    let words = normalize(text);
    if words.len() < 2 {
        return text.to_string();
    }

    let mut out = capitalize_first(&words[0]);
    for pair in words.windows(2) {
        let bridges = find_bridges(graph, &pair[0], &pair[1]);
        if let Some(bridge) = bridges.choose(rng) {
            out.push(' ');
            out.push_str(bridge);
        }
        out.push(' ');
        out.push_str(&pair[1]);
    }
    out
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
