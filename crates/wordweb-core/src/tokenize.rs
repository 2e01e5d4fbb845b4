//! Text normalization and term frequencies.
//!
//! Normalization lowercases the text, turns every character that is not an
//! ASCII lowercase letter into a separator, and splits on whitespace. The
//! same rule is used for ingestion and for query text.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occurrence counts of each normalized word in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Occurrences of `word` (0 if never seen).
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no word was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for word in iter {
            table.record(word);
        }
        table
    }
}

/// Tokenizer output: the token sequence and its frequency table.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    /// Normalized tokens in document order.
    pub tokens: Vec<String>,
    /// Per-word occurrence counts over `tokens`.
    pub frequencies: FrequencyTable,
}

impl TokenStream {
    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Normalize `text` into lowercase alphabetic tokens.
///
/// ```rust
/// use wordweb_core::tokenize::normalize;
///
/// assert_eq!(normalize("Hello, World! It's 2024."), ["hello", "world", "it", "s"]);
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Normalize `text` and count term frequencies.
///
/// Fails with [`Error::EmptyInput`] when no token survives normalization.
pub fn tokenize(text: &str) -> Result<TokenStream> {
    let tokens = normalize(text);
    if tokens.is_empty() {
        return Err(Error::EmptyInput);
    }
    let frequencies = tokens.iter().map(String::as_str).collect();
    Ok(TokenStream {
        tokens,
        frequencies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_digits() {
        let tokens = normalize("The  quick-brown fox\n jumps over 3 lazy dogs.");
        assert_eq!(
            tokens,
            ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dogs"]
        );
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("café naïve"), ["caf", "na", "ve"]);
    }

    #[test]
    fn test_tokenize_counts() {
        let stream = tokenize("a b A b, a!").unwrap();
        assert_eq!(stream.len(), 5);
        assert_eq!(stream.frequencies.count("a"), 3);
        assert_eq!(stream.frequencies.count("b"), 2);
        assert_eq!(stream.frequencies.count("c"), 0);
        assert_eq!(stream.frequencies.total(), 5);
        assert_eq!(stream.frequencies.len(), 2);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(matches!(tokenize(""), Err(Error::EmptyInput)));
        assert!(matches!(tokenize(" 123 ... !!"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_single_token() {
        let stream = tokenize("  Hello ").unwrap();
        assert_eq!(stream.tokens, ["hello"]);
        assert_eq!(stream.frequencies.len(), 1);
    }
}
