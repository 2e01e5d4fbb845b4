//! Cancellable random walks.
//!
//! A walk starts at a uniformly chosen word and follows uniformly chosen
//! outgoing edges until it reaches a word with no successors, is about to
//! take an edge it has already taken, or is cancelled.
//!
//! Cancellation is cooperative: the token is checked once per step, so a
//! walk stops at the next step boundary after [`CancelToken::cancel`].

use crate::{Error, Result, WordGraph};
use petgraph::graph::NodeIndex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::info;

/// Configuration for random walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Pause after every step, in milliseconds. 0 walks at full speed.
    pub step_delay_ms: u64,
}

/// One-shot cancellation signal shared between a walk and its caller.
///
/// Scoped to a single walk: once cancelled it stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create an unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Why a walk ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The current word has no outgoing edges.
    DeadEnd {
        /// Word the walk got stuck on.
        at: String,
    },
    /// The chosen edge had already been taken in this walk.
    RepeatedEdge {
        /// Edge source.
        from: String,
        /// Edge target (recorded as the last visited word).
        to: String,
    },
    /// The caller cancelled the walk.
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeadEnd { at } => write!(f, "Stopped (Dead End at '{at}')"),
            Self::RepeatedEdge { from, to } => write!(f, "Stopped (Repeated edge: {from}->{to})"),
            Self::Cancelled => f.write_str("Stopped (User Interruption)"),
        }
    }
}

/// Result of one walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkRecord {
    /// Visited words in order.
    pub words: Vec<String>,
    /// Why the walk ended.
    pub stop: StopReason,
}

impl WalkRecord {
    /// Consecutive `(source, target)` pairs taken by the walk.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Visited words joined with arrows.
    pub fn path_string(&self) -> String {
        self.words.join(" -> ")
    }
}

impl fmt::Display for WalkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Random Walk Path:")?;
        writeln!(f, "{}", self.path_string())?;
        writeln!(f)?;
        write!(f, "Status: {}", self.stop)
    }
}

/// Walk the graph once from a random start word.
///
/// Fails with [`Error::EmptyGraph`] when the graph has no words.
pub fn walk<R: Rng + ?Sized>(
    graph: &WordGraph,
    cancel: &CancelToken,
    config: WalkConfig,
    rng: &mut R,
) -> Result<WalkRecord> {
    let n = graph.word_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }

    let delay = Duration::from_millis(config.step_delay_ms);
    let mut current = NodeIndex::new(rng.gen_range(0..n));
    let mut words = Vec::new();
    let mut taken: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();

    let stop = loop {
        if cancel.is_cancelled() {
            break StopReason::Cancelled;
        }
        words.push(graph.word(current).to_string());

        let successors = graph.successors_of(current);
        if successors.is_empty() {
            break StopReason::DeadEnd {
                at: graph.word(current).to_string(),
            };
        }

        let (next, _) = successors[rng.gen_range(0..successors.len())];
        if !taken.insert((current, next)) {
            words.push(graph.word(next).to_string());
            break StopReason::RepeatedEdge {
                from: graph.word(current).to_string(),
                to: graph.word(next).to_string(),
            };
        }
        current = next;

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    };

    info!(steps = words.len(), stop = %stop, "random walk finished");
    Ok(WalkRecord { words, stop })
}

/// A walk running on a worker thread.
#[derive(Debug)]
pub struct WalkHandle {
    cancel: CancelToken,
    handle: JoinHandle<Result<WalkRecord>>,
}

impl WalkHandle {
    /// Ask the walk to stop at its next step boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// The token this walk observes.
    pub fn token(&self) -> &CancelToken {
        &self.cancel
    }

    /// True once the worker has returned.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the walk to finish.
    pub fn join(self) -> Result<WalkRecord> {
        self.handle
            .join()
            .map_err(|_| Error::Internal("random walk thread panicked".into()))?
    }
}

/// Run [`walk`] on a new thread.
///
/// The graph is shared read-only; `rng` moves into the worker. Each call
/// gets its own [`CancelToken`].
pub fn spawn_walk<G, R>(graph: Arc<G>, config: WalkConfig, mut rng: R) -> WalkHandle
where
    G: AsRef<WordGraph> + Send + Sync + 'static,
    R: Rng + Send + 'static,
{
    let cancel = CancelToken::new();
    let token = cancel.clone();
    let handle = thread::spawn(move || walk((*graph).as_ref(), &token, config, &mut rng));
    WalkHandle { cancel, handle }
}
