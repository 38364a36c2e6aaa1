//! State capability traits.
//!
//! `GameState` is the entire contract the search engine needs: legal
//! moves per agent, successor generation, terminal tests, and a scalar
//! score. `GridView` adds the positional accessors the combined
//! evaluation heuristic reads; a state only implements it when that
//! heuristic applies.
//!
//! ## Implementation notes
//!
//! - `legal_moves` must enumerate deterministically: the engine's
//!   tie-breaks depend on the order being stable across repeated calls
//!   on the same state.
//! - `successor` is pure. It returns a new state and leaves the receiver
//!   untouched; the engine threads states immutably through the
//!   recursion and never holds one beyond its call frame.

use crate::core::{AgentIndex, Move, MoveList, Position};

/// A search-state snapshot.
pub trait GameState: Clone {
    /// Total number of agents, including the maximizer. Always >= 1.
    fn agent_count(&self) -> usize;

    /// Legal moves for an agent, in stable enumeration order.
    ///
    /// An empty list marks the node as an implicit terminal for that
    /// agent.
    fn legal_moves(&self, agent: AgentIndex) -> MoveList;

    /// The state after `agent` takes `mv`.
    fn successor(&self, agent: AgentIndex, mv: Move) -> Self;

    /// Whether the game has been won.
    fn is_win(&self) -> bool;

    /// Whether the game has been lost.
    fn is_lose(&self) -> bool;

    /// The running score of this state.
    fn score(&self) -> f64;
}

/// One adversary as the evaluation heuristic sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdversaryView {
    pub position: Position,
    /// Remaining moves for which this adversary is scared (vulnerable).
    /// Zero means active.
    pub scared_timer: u32,
}

impl AdversaryView {
    /// Whether the adversary is currently scared.
    #[must_use]
    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// Positional accessors for grid-world evaluation.
pub trait GridView {
    /// The maximizer's position.
    fn player_position(&self) -> Position;

    /// Remaining food positions. Order is not significant.
    fn food(&self) -> Vec<Position>;

    /// All adversaries, indexed by agent order.
    fn adversaries(&self) -> Vec<AdversaryView>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adversary_view_scared() {
        let scared = AdversaryView {
            position: Position::new(1, 1),
            scared_timer: 3,
        };
        let active = AdversaryView {
            position: Position::new(1, 1),
            scared_timer: 0,
        };
        assert!(scared.is_scared());
        assert!(!active.is_scared());
    }
}
