//! Agent identification.
//!
//! Index 0 is always the maximizing agent (the player). Indices >= 1 are
//! adversaries, and within one round they move in increasing index order.

use serde::{Deserialize, Serialize};

/// Agent identifier supporting up to 255 agents.
///
/// Agent indices are 0-based: the maximizer is `AgentIndex(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentIndex(pub u8);

impl AgentIndex {
    /// The maximizing agent.
    pub const PLAYER: AgentIndex = AgentIndex(0);

    /// Create a new agent index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the maximizing agent.
    #[must_use]
    pub const fn is_player(self) -> bool {
        self.0 == 0
    }

    /// The next agent in round order.
    #[must_use]
    pub const fn next(self) -> AgentIndex {
        AgentIndex(self.0 + 1)
    }

    /// Iterate over the adversary indices for a game with `agent_count` agents.
    ///
    /// ```
    /// use rust_pursuit::core::AgentIndex;
    ///
    /// let advs: Vec<_> = AgentIndex::adversaries(3).collect();
    /// assert_eq!(advs.len(), 2);
    /// assert_eq!(advs[0], AgentIndex::new(1));
    /// assert_eq!(advs[1], AgentIndex::new(2));
    /// ```
    pub fn adversaries(agent_count: usize) -> impl Iterator<Item = AgentIndex> {
        (1..agent_count as u8).map(AgentIndex)
    }
}

impl std::fmt::Display for AgentIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}
