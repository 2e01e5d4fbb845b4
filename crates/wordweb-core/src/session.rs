//! A stateful query context over one loaded document.
//!
//! A [`Session`] owns the current [`Corpus`], the last PageRank scores
//! and the RNG used by text generation and walks. Loading new text replaces
//! the corpus and drops those scores.

use crate::algo::augment;
use crate::algo::bridge::{self, BridgeWords};
use crate::algo::pagerank::{self, PageRankResult};
use crate::algo::path::{self, Path};
use crate::algo::walk::{self, CancelToken, WalkHandle, WalkRecord};
use crate::builder::{Corpus, GraphBuilder};
use crate::config::EngineConfig;
use crate::formats::Dot;
use crate::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tracing::{debug, warn};

/// Query context holding at most one corpus.
///
/// # Example
///
/// ```rust
/// use wordweb_core::{EngineConfig, Session};
///
/// let mut session = Session::new(EngineConfig::default());
/// session.load_text("to explore strange new worlds").unwrap();
///
/// let bridges = session.bridge_words("explore", "new").unwrap();
/// assert_eq!(bridges.words, ["strange"]);
/// ```
#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    corpus: Option<Arc<Corpus>>,
    ranks: Option<PageRankResult>,
    rng: ChaCha8Rng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Session {
    /// Create an empty session. The RNG is seeded from `config.rng_seed`
    /// when set.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            corpus: None,
            ranks: None,
            rng,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a corpus from `text` and make it current.
    ///
    /// Text without any word installs an empty corpus and logs a warning
    /// rather than failing.
    pub fn load_text(&mut self, text: &str) -> Result<Arc<Corpus>> {
        let corpus = match GraphBuilder::from_text(text) {
            Ok(corpus) => corpus,
            Err(Error::EmptyInput) => {
                warn!("input contains no words, loaded an empty graph");
                Corpus::default()
            }
            Err(e) => return Err(e),
        };

        let corpus = Arc::new(corpus);
        self.corpus = Some(Arc::clone(&corpus));
        self.ranks = None;
        Ok(corpus)
    }

    /// The current corpus.
    pub fn corpus(&self) -> Result<&Arc<Corpus>> {
        self.corpus.as_ref().ok_or(Error::NoGraphLoaded)
    }

    /// True once some text has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.corpus.is_some()
    }

    /// Bridge words from `word1` to `word2`.
    pub fn bridge_words(&self, word1: &str, word2: &str) -> Result<BridgeWords> {
        bridge::bridge_words(&self.corpus()?.graph, word1, word2)
    }

    /// Insert bridge words into `text`.
    pub fn generate_text(&mut self, text: &str) -> Result<String> {
        let corpus = Arc::clone(self.corpus()?);
        Ok(augment::generate_text(&corpus.graph, text, &mut self.rng))
    }

    /// Shortest path between two words.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Path> {
        path::shortest_path(&self.corpus()?.graph, start, end)
    }

    /// Shortest paths from `start` to every reachable word.
    pub fn all_shortest_paths(&self, start: &str) -> Result<Vec<Path>> {
        path::all_shortest_paths(&self.corpus()?.graph, start)
    }

    /// Compute PageRank over the current corpus.
    ///
    /// Always a full recomputation; the result replaces any earlier scores
    /// and backs [`Session::rank_of`].
    pub fn page_rank(&mut self) -> Result<&PageRankResult> {
        let corpus = Arc::clone(self.corpus()?);
        debug!("computing pagerank");
        let ranks = pagerank::pagerank(
            &corpus.graph,
            Some(&corpus.frequencies),
            self.config.pagerank,
        );
        let ranks: &PageRankResult = self.ranks.insert(ranks);
        Ok(ranks)
    }

    /// Score of `word` from the last PageRank computation.
    ///
    /// `None` if PageRank has not run since the last load, or the word is
    /// not in the graph.
    pub fn rank_of(&self, word: &str) -> Option<f64> {
        self.ranks
            .as_ref()?
            .score(&word.trim().to_lowercase())
    }

    /// Run one random walk on the calling thread.
    pub fn random_walk(&mut self, cancel: &CancelToken) -> Result<WalkRecord> {
        let corpus = Arc::clone(self.corpus()?);
        walk::walk(&corpus.graph, cancel, self.config.walk, &mut self.rng)
    }

    /// Start a random walk on a worker thread.
    ///
    /// The worker gets its own RNG drawn from the session's, so seeded
    /// sessions stay reproducible.
    pub fn spawn_walk(&mut self) -> Result<WalkHandle> {
        let corpus = Arc::clone(self.corpus()?);
        if corpus.graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let rng = ChaCha8Rng::seed_from_u64(self.rng.gen());
        Ok(walk::spawn_walk(corpus, self.config.walk, rng))
    }

    /// DOT rendering of the current graph, optionally highlighting a path.
    pub fn export_dot(&self, highlight: Option<&[String]>) -> Result<String> {
        Dot::to_string(&self.corpus()?.graph, highlight)
    }
}
