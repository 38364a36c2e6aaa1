//! Raw-score evaluation.

use crate::state::GameState;

use super::Evaluator;

/// Evaluates a state as its raw score, nothing else.
///
/// The baseline evaluator for adversarial search: all positional
/// judgement is delegated to whatever the game's scoring rules already
/// encode.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluator;

impl<S: GameState> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}
