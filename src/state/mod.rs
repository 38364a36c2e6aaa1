//! The state abstraction consumed by the search engine.
//!
//! The engine never owns a game world; it works against the small
//! capability interfaces defined here, so it can be driven by the full
//! grid world or by a synthetic state in tests.

mod game;

pub use game::{AdversaryView, GameState, GridView};
