//! `PageRank` centrality seeded from term frequency.
//!
//! Computes the importance of words based on which words lead into them.
//! Higher scores indicate more "central" words.

use crate::tokenize::FrequencyTable;
use crate::WordGraph;
use petgraph::Direction;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// `PageRank` configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Typically 0.85.
    pub damping_factor: f64,
    /// Maximum iterations before stopping.
    pub max_iterations: usize,
    /// Convergence tolerance (L1 norm of score changes).
    pub tolerance: f64,
    /// How far the frequency seed may drift from 1.0 before it is renormalized.
    pub seed_tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
            seed_tolerance: 1e-5,
        }
    }
}

/// Outcome of a full `PageRank` computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankResult {
    /// Final score of every word.
    pub scores: HashMap<String, f64>,
    /// Rounds performed.
    pub iterations: usize,
    /// True if the tolerance was reached before the iteration cap.
    pub converged: bool,
}

impl PageRankResult {
    /// Score of `word`, if it was ranked.
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Sum of all scores (1.0 up to rounding).
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    /// Scores sorted descending, ties broken alphabetically.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> =
            self.scores.iter().map(|(w, &s)| (w.as_str(), s)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Initial rank vector, indexed by node index.
///
/// Uses `count / total` from `frequencies` when it has any mass, otherwise
/// uniform `1/N`. A frequency seed that does not sum to 1 (words missing
/// from the table) is renormalized.
fn seed_scores(
    graph: &WordGraph,
    frequencies: Option<&FrequencyTable>,
    config: &PageRankConfig,
) -> Vec<f64> {
    let n = graph.word_count();
    let uniform = vec![1.0 / n as f64; n];

    let Some(table) = frequencies.filter(|t| !t.is_empty() && t.total() > 0) else {
        debug!("no term frequencies, seeding uniformly");
        return uniform;
    };

    let total = table.total() as f64;
    let mut scores: Vec<f64> = graph
        .words()
        .map(|w| table.count(w) as f64 / total)
        .collect();

    let sum: f64 = scores.iter().sum();
    if (sum - 1.0).abs() > config.seed_tolerance {
        if sum > 0.0 {
            warn!(sum, "frequency seed does not sum to 1, normalizing");
            for s in &mut scores {
                *s /= sum;
            }
        } else {
            warn!("frequency seed sums to zero, seeding uniformly");
            return uniform;
        }
    }
    scores
}

/// Compute `PageRank` for all words.
///
/// # Algorithm
/// Jacobi-style power iteration. Each round reads only the previous round's
/// scores:
///
/// `new(p) = (1-d)/N + d*dangling/N + d * sum(rank(q)/outdeg(q) for q -> p)`
///
/// where `dangling` is the previous-round mass of words without outgoing
/// edges. Stops after `max_iterations` rounds or once the L1 change is at or
/// below `tolerance`. Edge weights do not affect the result; only the
/// existence of a transition does.
#[must_use]
#[allow(clippy::cast_precision_loss)] // word counts won't exceed f64 precision
pub fn pagerank(
    graph: &WordGraph,
    frequencies: Option<&FrequencyTable>,
    config: PageRankConfig,
) -> PageRankResult {
    let n = graph.word_count();
    if n == 0 {
        return PageRankResult {
            scores: HashMap::new(),
            iterations: 0,
            converged: true,
        };
    }

    let pg = graph.as_petgraph();
    let n_f64 = n as f64;
    let d = config.damping_factor;
    let teleport = (1.0 - d) / n_f64;

    let out_degrees: Vec<usize> = pg
        .node_indices()
        .map(|idx| pg.edges_directed(idx, Direction::Outgoing).count())
        .collect();
    let incoming: Vec<Vec<usize>> = pg
        .node_indices()
        .map(|idx| {
            pg.neighbors_directed(idx, Direction::Incoming)
                .map(|q| q.index())
                .collect()
        })
        .collect();

    let mut scores = seed_scores(graph, frequencies, &config);
    let mut iterations = 0;
    let mut delta = f64::INFINITY;

    while iterations < config.max_iterations && delta > config.tolerance {
        let dangling_sum: f64 = out_degrees
            .iter()
            .zip(&scores)
            .filter(|(&deg, _)| deg == 0)
            .map(|(_, &s)| s)
            .sum();
        let base = teleport + d * dangling_sum / n_f64;

        let next: Vec<f64> = incoming
            .par_iter()
            .map(|sources| {
                let link_mass: f64 = sources
                    .iter()
                    .map(|&q| scores[q] / out_degrees[q] as f64)
                    .sum();
                base + d * link_mass
            })
            .collect();

        delta = scores
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .sum();
        scores = next;
        iterations += 1;
    }

    let converged = delta <= config.tolerance;
    debug!(iterations, converged, delta, "pagerank finished");

    let scores = graph
        .words()
        .zip(scores)
        .map(|(w, s)| (w.to_string(), s))
        .collect();

    PageRankResult {
        scores,
        iterations,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;

    fn cycle() -> WordGraph {
        let mut g = WordGraph::new();
        g.add_transition("a", "b");
        g.add_transition("b", "c");
        g.add_transition("c", "a");
        g
    }

    #[test]
    fn test_pagerank_cycle() {
        let result = pagerank(&cycle(), None, PageRankConfig::default());

        // Symmetric cycle: all scores should be equal
        let a = result.score("a").unwrap();
        let b = result.score("b").unwrap();
        let c = result.score("c").unwrap();

        assert!((a - b).abs() < 1e-4, "a={a} b={b}");
        assert!((b - c).abs() < 1e-4, "b={b} c={c}");
        assert!((a - 1.0 / 3.0).abs() < 0.01);
        assert!(result.converged);
    }

    #[test]
    fn test_pagerank_star() {
        let mut g = WordGraph::new();
        // hub -> a, hub -> b, hub -> c
        g.add_transition("hub", "a");
        g.add_transition("hub", "b");
        g.add_transition("hub", "c");

        let result = pagerank(&g, None, PageRankConfig::default());

        // a, b, c are dangling and receive mass from hub + teleport;
        // hub only gets teleport and dangling redistribution
        let hub = result.score("hub").unwrap();
        let a = result.score("a").unwrap();
        assert!(a > hub, "leaf a ({a}) should rank higher than hub ({hub})");
        assert!((result.total() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_single_word() {
        let corpus = GraphBuilder::from_text("alone").unwrap();
        let result = pagerank(
            &corpus.graph,
            Some(&corpus.frequencies),
            PageRankConfig::default(),
        );
        assert!((result.score("alone").unwrap() - 1.0).abs() < 1e-12);
        assert!(result.converged);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_empty_graph() {
        let result = pagerank(&WordGraph::new(), None, PageRankConfig::default());
        assert!(result.scores.is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_frequency_seed() {
        let corpus = GraphBuilder::from_text("a a a b").unwrap();
        let seed = seed_scores(
            &corpus.graph,
            Some(&corpus.frequencies),
            &PageRankConfig::default(),
        );
        assert_eq!(seed, vec![0.75, 0.25]);
    }

    #[test]
    fn test_seed_falls_back_to_uniform() {
        let g = cycle();
        let empty = FrequencyTable::new();
        let seed = seed_scores(&g, Some(&empty), &PageRankConfig::default());
        assert!(seed.iter().all(|&s| (s - 1.0 / 3.0).abs() < 1e-12));

        // a table that knows none of the graph's words sums to zero
        let unrelated: FrequencyTable = ["x", "y"].into_iter().collect();
        let seed = seed_scores(&g, Some(&unrelated), &PageRankConfig::default());
        assert!(seed.iter().all(|&s| (s - 1.0 / 3.0).abs() < 1e-12));
    }

    #[test]
    fn test_partial_seed_is_renormalized() {
        let g = cycle();
        let table: FrequencyTable = ["a", "a", "b", "zzz"].into_iter().collect();
        let seed = seed_scores(&g, Some(&table), &PageRankConfig::default());
        let sum: f64 = seed.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((seed[0] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(seed[2], 0.0);
    }

    #[test]
    fn test_sums_to_one_with_dangling() {
        let corpus = GraphBuilder::from_text(
            "to explore strange new worlds to seek out new life and new civilizations",
        )
        .unwrap();
        let result = pagerank(
            &corpus.graph,
            Some(&corpus.frequencies),
            PageRankConfig::default(),
        );
        assert!(
            (result.total() - 1.0).abs() < 1e-4,
            "scores should sum to 1.0, got {}",
            result.total()
        );
        assert!(result.scores.values().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_idempotent() {
        let corpus = GraphBuilder::from_text("the cat sat on the mat the end").unwrap();
        let run = || {
            pagerank(
                &corpus.graph,
                Some(&corpus.frequencies),
                PageRankConfig::default(),
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_iteration_cap() {
        let config = PageRankConfig {
            max_iterations: 2,
            tolerance: 0.0,
            ..Default::default()
        };
        // a uniform seed is already stationary on a cycle; use a star instead
        let mut g = WordGraph::new();
        g.add_transition("hub", "a");
        g.add_transition("hub", "b");
        let result = pagerank(&g, None, config);
        assert_eq!(result.iterations, 2);
        assert!(!result.converged);
    }

    #[test]
    fn test_ranked_descending() {
        let mut g = WordGraph::new();
        g.add_transition("hub", "a");
        g.add_transition("b", "a");
        let result = pagerank(&g, None, PageRankConfig::default());
        let ranked = result.ranked();
        assert_eq!(ranked[0].0, "a");
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
