//! Full-match playback: a search agent against random adversaries.

use crate::core::{AgentIndex, SimRng};
use crate::eval::Evaluator;
use crate::search::SearchAgent;
use crate::state::GameState;

use super::world::GridState;

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// The player cleared the board.
    Won,
    /// The player was caught.
    Lost,
    /// The round cap was hit, or the player had no decision to make.
    Stalled,
}

/// Outcome of one played match.
#[derive(Clone, Copy, Debug)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub score: f64,
    /// Completed rounds.
    pub rounds: u32,
}

/// Plays rounds until a terminal state or a round cap: the search agent
/// moves the player, adversaries choose uniformly at random from a
/// seeded [`SimRng`]. Same seed, same match.
pub struct MatchRunner {
    rng: SimRng,
    round_cap: u32,
}

impl MatchRunner {
    /// Create a runner with the given RNG seed and a default cap of 200
    /// rounds.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SimRng::new(seed),
            round_cap: 200,
        }
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_round_cap(mut self, cap: u32) -> Self {
        self.round_cap = cap;
        self
    }

    /// Play one match from `state`.
    pub fn run<E>(&mut self, mut state: GridState, agent: &mut SearchAgent<E>) -> MatchOutcome
    where
        E: Evaluator<GridState>,
    {
        let mut rounds = 0;

        'rounds: while rounds < self.round_cap && !terminal(&state) {
            let Some(mv) = agent.decide(&state) else {
                break;
            };
            state = state.successor(AgentIndex::PLAYER, mv);

            for adversary in AgentIndex::adversaries(state.agent_count()) {
                if terminal(&state) {
                    break 'rounds;
                }
                let moves = state.legal_moves(adversary);
                if let Some(&mv) = self.rng.choose(&moves) {
                    state = state.successor(adversary, mv);
                }
            }

            rounds += 1;
        }

        let result = if state.is_win() {
            MatchResult::Won
        } else if state.is_lose() {
            MatchResult::Lost
        } else {
            MatchResult::Stalled
        };

        MatchOutcome {
            result,
            score: state.score(),
            rounds,
        }
    }
}

fn terminal(state: &GridState) -> bool {
    state.is_win() || state.is_lose()
}
