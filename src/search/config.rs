//! Search configuration parameters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How many rounds ahead to expand the lookahead tree.
    pub lookahead_depth: u16,

    /// Maximum nodes to allocate in the tree.
    /// Keeps wide positions from exhausting memory.
    pub max_nodes: usize,

    /// Soft wall-clock budget for move selection.
    pub time_budget: Duration,

    /// Seed for the randomized opponent policy.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lookahead_depth: 2,
            max_nodes: 200_000,
            time_budget: Duration::from_millis(90),
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Set the lookahead depth.
    #[must_use]
    pub fn with_lookahead_depth(mut self, depth: u16) -> Self {
        self.lookahead_depth = depth;
        self
    }

    /// Set the node cap.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Set the time budget.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
