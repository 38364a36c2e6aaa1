//! # rust-pursuit
//!
//! Depth-limited adversarial search for grid pursuit games: one
//! maximizing player versus one or more adversaries, taking turns on a
//! grid.
//!
//! ## Design Principles
//!
//! 1. **Opaque states**: The engine consumes a small capability trait
//!    (`GameState`) and never owns game rules. Any world that can
//!    enumerate moves, generate successors, and report terminals is
//!    searchable.
//!
//! 2. **One traversal, three strategies**: Minimax, alpha-beta, and
//!    expectimax share a single recursive core; the strategy only
//!    selects the combination rule at adversary nodes.
//!
//! 3. **Immutable threading**: Successor generation returns new states;
//!    the engine holds references only for the duration of a call frame,
//!    so search is reentrant and deterministic.
//!
//! ## Modules
//!
//! - `core`: agent indices, moves, positions, seeded RNG
//! - `state`: the `GameState`/`GridView` capability traits
//! - `eval`: pluggable leaf evaluation functions
//! - `search`: the search engine and the `SearchAgent` selector
//! - `games`: a concrete grid world used by tests and benchmarks

pub mod core;
pub mod eval;
pub mod games;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use crate::core::{AgentIndex, Move, MoveList, Position, SimRng, SimRngState};

pub use crate::state::{AdversaryView, GameState, GridView};

pub use crate::eval::{CombinedEvaluator, Evaluator, ScoreEvaluator};

pub use crate::search::{
    ReflexAgent, SearchAgent, SearchConfig, SearchResult, SearchStats, Strategy,
};

pub use crate::games::grid::{
    GridState, Layout, LayoutError, MatchOutcome, MatchResult, MatchRunner, SCARED_MOVES,
};
