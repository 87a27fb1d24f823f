//! Configuration for an interactive roller session.

use crate::dice::pool::DEFAULT_POOL_LIMIT;
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Configuration for a roller session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Maximum number of dice in the pool.
    pub pool_limit: usize,
    /// Maximum number of history entries kept.
    pub history_limit: usize,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pool_limit: DEFAULT_POOL_LIMIT,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pool limit (at least 1).
    pub fn with_pool_limit(mut self, limit: usize) -> Self {
        self.pool_limit = limit.max(1);
        self
    }

    /// Set the history limit (at least 1).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }
}
