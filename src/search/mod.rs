//! Depth-limited adversarial search.
//!
//! ## Overview
//!
//! Three strategies over one shared recursive core:
//!
//! - **Minimax**: adversaries play the worst case for the maximizer.
//! - **Alpha-beta**: minimax plus pruning of subtrees that cannot affect
//!   the chosen action. Value-identical to minimax, cheaper.
//! - **Expectimax**: adversaries pick uniformly at random; adversary
//!   nodes average their children instead of minimizing.
//!
//! The horizon, `max_depth`, counts full rounds (one move per agent),
//! not individual agent moves. Leaves are valued by a pluggable
//! [`Evaluator`](crate::eval::Evaluator).
//!
//! ## Usage
//!
//! ```
//! use rust_pursuit::{CombinedEvaluator, GridState, SearchAgent, SearchConfig, Strategy};
//!
//! let state = GridState::parse("%%%%%\n%P..%\n%%%%%").unwrap();
//!
//! let config = SearchConfig::default()
//!     .with_strategy(Strategy::AlphaBeta)
//!     .with_max_depth(2);
//! let mut agent = SearchAgent::new(CombinedEvaluator::default(), config);
//!
//! let chosen = agent.decide(&state);
//! assert!(chosen.is_some());
//! ```

pub mod agent;
pub mod config;
pub mod engine;
pub mod stats;

pub use agent::{ReflexAgent, SearchAgent};
pub use config::{SearchConfig, Strategy};
pub use engine::SearchResult;
pub use stats::SearchStats;
