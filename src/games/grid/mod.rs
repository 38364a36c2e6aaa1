//! Grid pursuit world.
//!
//! A small but complete implementation of the state abstraction:
//! - ASCII layouts (walls, food, capsules, player, adversaries)
//! - movement, scoring, scared timers, win/lose detection
//! - a match runner pitting a search agent against random adversaries
//!
//! The search engine never depends on this module; it exists so the
//! engine can be validated against a real rule set.

mod layout;
mod runner;
mod world;

pub use layout::{Layout, LayoutError};
pub use runner::{MatchOutcome, MatchResult, MatchRunner};
pub use world::{GridState, SCARED_MOVES};
