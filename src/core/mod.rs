//! Core engine types: agent indices, moves, grid positions, RNG.
//!
//! These are the building blocks shared by the search engine, the
//! evaluation functions, and the grid world. None of them encode game
//! rules; rules live behind the `state` traits.

pub mod agent;
pub mod moves;
pub mod position;
pub mod rng;

pub use agent::AgentIndex;
pub use moves::{Move, MoveList};
pub use position::Position;
pub use rng::{SimRng, SimRngState};
