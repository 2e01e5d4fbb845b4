//! Engine configuration.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! rng_seed = 7
//!
//! [pagerank]
//! damping_factor = 0.85
//! max_iterations = 100
//! tolerance = 1e-6
//!
//! [walk]
//! step_delay_ms = 0
//! ```

use crate::algo::pagerank::PageRankConfig;
use crate::algo::walk::WalkConfig;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Tunables for a [`crate::Session`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// PageRank parameters.
    pub pagerank: PageRankConfig,
    /// Random walk parameters.
    pub walk: WalkConfig,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }
}
