//! Leaf evaluation functions.
//!
//! An evaluator maps a state to a scalar desirability value. Evaluators
//! are pure: the same state always yields the same value, and the only
//! non-finite values are the `+inf`/`-inf` sentinels at explicit
//! win/lose states, which guarantees terminals dominate every
//! non-terminal comparison.

mod combined;
mod score;

pub use combined::CombinedEvaluator;
pub use score::ScoreEvaluator;

/// Maps a state to a scalar value. Higher is better for the maximizer.
pub trait Evaluator<S>: Send + Sync {
    /// Evaluate a state.
    fn evaluate(&self, state: &S) -> f64;
}
