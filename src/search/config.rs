//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Which combination rule adversary nodes use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Adversaries minimize; the full tree is explored.
    Minimax,

    /// Adversaries minimize; subtrees proven irrelevant are pruned.
    /// Selects the same action as `Minimax` at lower cost.
    #[default]
    AlphaBeta,

    /// Adversaries pick uniformly at random; nodes average instead of
    /// minimizing. No pruning is possible since every branch contributes
    /// to the expectation.
    Expectimax,
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Combination rule for adversary nodes.
    pub strategy: Strategy,

    /// Search horizon in full rounds (one move for every agent).
    /// The depth counter advances once per round, not once per agent.
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_depth: 2,
        }
    }
}

impl SearchConfig {
    /// Create a new config with the given strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with the given horizon.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}
