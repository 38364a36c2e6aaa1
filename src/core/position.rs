//! Grid positions and the Manhattan distance metric.

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// A cell on the grid. `x` is the column, `y` the row from the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step in the given direction.
    #[must_use]
    pub fn step(self, mv: Move) -> Position {
        let (dx, dy) = mv.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
