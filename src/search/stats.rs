//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during a single `search` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Interior nodes expanded.
    pub nodes_expanded: u32,

    /// Leaves handed to the evaluation function (terminal, actionless,
    /// or depth-exhausted nodes).
    pub leaves_evaluated: u32,

    /// Alpha-beta cuts taken. Always zero for the other strategies.
    pub prunes: u32,

    /// Total search time (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total nodes visited, interior and leaf.
    #[must_use]
    pub fn nodes_visited(&self) -> u32 {
        self.nodes_expanded + self.leaves_evaluated
    }

    /// Nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.nodes_visited()) / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
