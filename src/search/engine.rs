//! The recursive search core.
//!
//! One parameterized traversal serves all three strategies; they differ
//! only in the combination rule at adversary nodes and in whether a
//! pruning window is consulted. Keeping a single skeleton avoids the
//! copy-paste drift of three hand-maintained variants.
//!
//! ## Round structure
//!
//! A round is one move for every agent: the maximizer (agent 0) first,
//! then each adversary in increasing index order. The depth counter
//! advances when the last adversary hands control back to the maximizer,
//! never per agent move. In a game with no adversaries the round closes
//! immediately after the maximizer's move.
//!
//! ## Leaves
//!
//! Every node checks, before expansion: win, lose, zero legal moves for
//! the current agent, depth horizon reached. Any of these makes the node
//! a leaf valued by the evaluation function, with no chosen action. A
//! node that is both terminal and actionless is still evaluated exactly
//! once.

use crate::core::{AgentIndex, Move};
use crate::eval::Evaluator;
use crate::state::GameState;

use super::config::Strategy;
use super::stats::SearchStats;

/// Value and chosen action of one node.
///
/// `action` is `None` at leaves (no move is taken there) and at chance
/// nodes (the expectation is over all moves, none is chosen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    pub value: f64,
    pub action: Option<Move>,
}

/// Alpha-beta window, threaded through every call and consulted only by
/// `Strategy::AlphaBeta`.
///
/// Moving down the tree the window only narrows: alpha rises, beta
/// falls.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Window {
    /// Best value the maximizer can already guarantee on this path.
    pub alpha: f64,

    /// Best value the minimizing side can already guarantee.
    pub beta: f64,
}

impl Window {
    /// The unconstrained root window.
    pub fn root() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }
}

/// Borrowed context for one search invocation.
pub(crate) struct SearchRun<'a, E> {
    pub evaluator: &'a E,
    pub strategy: Strategy,
    pub max_depth: u32,
    pub stats: &'a mut SearchStats,
}

impl<'a, E> SearchRun<'a, E> {
    /// Maximizer node for agent 0 at the given round.
    pub(crate) fn max_node<S>(&mut self, state: &S, depth: u32, mut window: Window) -> SearchResult
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let moves = state.legal_moves(AgentIndex::PLAYER);
        if state.is_win() || state.is_lose() || moves.is_empty() || depth == self.max_depth {
            return self.leaf(state);
        }

        self.stats.nodes_expanded += 1;
        let solo = state.agent_count() == 1;

        let mut best = SearchResult {
            value: f64::NEG_INFINITY,
            action: None,
        };
        for (i, &mv) in moves.iter().enumerate() {
            let successor = state.successor(AgentIndex::PLAYER, mv);
            let value = if solo {
                self.max_node(&successor, depth + 1, window).value
            } else {
                self.adversary_node(&successor, AgentIndex::new(1), depth, window)
                    .value
            };

            // First-maximal tie-break: only a strictly greater value
            // displaces the running best.
            if i == 0 || value > best.value {
                best = SearchResult {
                    value,
                    action: Some(mv),
                };
            }

            if self.strategy == Strategy::AlphaBeta {
                if best.value > window.beta {
                    self.stats.prunes += 1;
                    return best;
                }
                window.alpha = window.alpha.max(best.value);
            }
        }

        best
    }

    /// Adversary node. Minimizes (or averages, under `Expectimax`) over
    /// the moves of `agent`, chaining into the next adversary at the
    /// same depth or back into the maximizer at depth + 1.
    fn adversary_node<S>(
        &mut self,
        state: &S,
        agent: AgentIndex,
        depth: u32,
        mut window: Window,
    ) -> SearchResult
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let moves = state.legal_moves(agent);
        if state.is_win() || state.is_lose() || moves.is_empty() || depth == self.max_depth {
            return self.leaf(state);
        }

        self.stats.nodes_expanded += 1;
        let last = agent.index() == state.agent_count() - 1;

        if self.strategy == Strategy::Expectimax {
            let mut total = 0.0;
            for &mv in &moves {
                let successor = state.successor(agent, mv);
                total += self.descend(&successor, agent, depth, last, window).value;
            }
            return SearchResult {
                value: total / moves.len() as f64,
                action: None,
            };
        }

        let mut best = SearchResult {
            value: f64::INFINITY,
            action: None,
        };
        for (i, &mv) in moves.iter().enumerate() {
            let successor = state.successor(agent, mv);
            let value = self.descend(&successor, agent, depth, last, window).value;

            if i == 0 || value < best.value {
                best = SearchResult {
                    value,
                    action: Some(mv),
                };
            }

            if self.strategy == Strategy::AlphaBeta {
                if best.value < window.alpha {
                    self.stats.prunes += 1;
                    return best;
                }
                window.beta = window.beta.min(best.value);
            }
        }

        best
    }

    /// Continue the round after `agent` has moved.
    fn descend<S>(
        &mut self,
        successor: &S,
        agent: AgentIndex,
        depth: u32,
        last: bool,
        window: Window,
    ) -> SearchResult
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if last {
            self.max_node(successor, depth + 1, window)
        } else {
            self.adversary_node(successor, agent.next(), depth, window)
        }
    }

    /// Value a leaf via the evaluation function.
    fn leaf<S>(&mut self, state: &S) -> SearchResult
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.leaves_evaluated += 1;
        SearchResult {
            value: self.evaluator.evaluate(state),
            action: None,
        }
    }
}
