//! Top-level search policy object.

use std::time::Instant;

use crate::core::{AgentIndex, Move};
use crate::eval::Evaluator;
use crate::state::GameState;

use super::config::SearchConfig;
use super::engine::{SearchResult, SearchRun, Window};
use super::stats::SearchStats;

/// Owns the evaluation function and search configuration, and runs one
/// search per decision point.
///
/// Configuration is captured at construction and never mutated during a
/// search; the agent is reusable across decision points and carries no
/// state between them beyond the last call's statistics.
pub struct SearchAgent<E> {
    evaluator: E,
    config: SearchConfig,
    stats: SearchStats,
}

impl<E> SearchAgent<E> {
    /// Create a new agent with the given evaluator and configuration.
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        Self {
            evaluator,
            config,
            stats: SearchStats::new(),
        }
    }

    /// Run the configured search from `state` and return the root value
    /// and chosen action.
    ///
    /// Panics if the state reports zero agents; that is a
    /// misconfiguration, not a searchable position.
    pub fn search<S>(&mut self, state: &S) -> SearchResult
    where
        S: GameState,
        E: Evaluator<S>,
    {
        assert!(
            state.agent_count() >= 1,
            "search requires at least one agent"
        );

        let start = Instant::now();
        self.stats.reset();

        let evaluator = &self.evaluator;
        let stats = &mut self.stats;
        let result = SearchRun {
            evaluator,
            strategy: self.config.strategy,
            max_depth: self.config.max_depth,
            stats,
        }
        .max_node(state, 0, Window::root());

        self.stats.time_us = start.elapsed().as_micros() as u64;
        result
    }

    /// Select an action for the maximizer.
    ///
    /// Returns `None` when the root is a leaf (terminal, actionless, or
    /// a zero-depth horizon).
    pub fn decide<S>(&mut self, state: &S) -> Option<Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.search(state).action
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The evaluation function.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

/// One-ply greedy policy: scores the successor of each legal move with
/// the evaluation function and picks the best, no lookahead.
///
/// Adversaries never move during the appraisal, so this is cheaper and
/// weaker than any configured [`SearchAgent`]. Ties go to the earliest
/// enumerated move, the same rule the search engine uses.
pub struct ReflexAgent<E> {
    evaluator: E,
}

impl<E> ReflexAgent<E> {
    /// Create a new reflex agent with the given evaluator.
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Select an action for the maximizer.
    ///
    /// Returns `None` on terminal or actionless states.
    pub fn decide<S>(&self, state: &S) -> Option<Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if state.is_win() || state.is_lose() {
            return None;
        }

        let mut best: Option<(f64, Move)> = None;
        for &mv in &state.legal_moves(AgentIndex::PLAYER) {
            let value = self
                .evaluator
                .evaluate(&state.successor(AgentIndex::PLAYER, mv));
            if best.map_or(true, |(v, _)| value > v) {
                best = Some((value, mv));
            }
        }
        best.map(|(_, mv)| mv)
    }

    /// The evaluation function.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AgentIndex, MoveList};
    use crate::eval::ScoreEvaluator;
    use crate::search::Strategy;

    // One-cell world: the player can only stop, adversaries cannot move.
    #[derive(Clone)]
    struct ConstState {
        agents: usize,
    }

    impl GameState for ConstState {
        fn agent_count(&self) -> usize {
            self.agents
        }

        fn legal_moves(&self, agent: AgentIndex) -> MoveList {
            let mut moves = MoveList::new();
            if agent.is_player() {
                moves.push(Move::Stop);
            }
            moves
        }

        fn successor(&self, _agent: AgentIndex, _mv: Move) -> Self {
            self.clone()
        }

        fn is_win(&self) -> bool {
            false
        }

        fn is_lose(&self) -> bool {
            false
        }

        fn score(&self) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_decide_returns_only_move() {
        let mut agent = SearchAgent::new(ScoreEvaluator, SearchConfig::default());
        let state = ConstState { agents: 2 };

        assert_eq!(agent.decide(&state), Some(Move::Stop));
    }

    #[test]
    fn test_stats_populated_after_search() {
        let mut agent = SearchAgent::new(ScoreEvaluator, SearchConfig::default());
        let state = ConstState { agents: 2 };

        let result = agent.search(&state);
        assert_eq!(result.value, 1.0);
        assert!(agent.stats().leaves_evaluated > 0);
        assert!(agent.stats().nodes_expanded > 0);
    }

    #[test]
    fn test_zero_depth_returns_no_action() {
        let config = SearchConfig::default().with_max_depth(0);
        let mut agent = SearchAgent::new(ScoreEvaluator, config);
        let state = ConstState { agents: 2 };

        let result = agent.search(&state);
        assert_eq!(result.action, None);
        assert_eq!(result.value, 1.0);
    }

    #[test]
    fn test_stats_reset_between_searches() {
        let mut agent = SearchAgent::new(
            ScoreEvaluator,
            SearchConfig::default().with_strategy(Strategy::Minimax),
        );
        let state = ConstState { agents: 2 };

        agent.search(&state);
        let first = agent.stats().leaves_evaluated;
        agent.search(&state);
        assert_eq!(agent.stats().leaves_evaluated, first);
    }

    #[test]
    fn test_reflex_returns_only_move() {
        let agent = ReflexAgent::new(ScoreEvaluator);
        let state = ConstState { agents: 2 };

        assert_eq!(agent.decide(&state), Some(Move::Stop));
    }

    #[test]
    #[should_panic(expected = "at least one agent")]
    fn test_zero_agents_is_a_misconfiguration() {
        let mut agent = SearchAgent::new(ScoreEvaluator, SearchConfig::default());
        let state = ConstState { agents: 0 };
        let _ = agent.search(&state);
    }
}
