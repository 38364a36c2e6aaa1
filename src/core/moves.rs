//! Moves on the grid.
//!
//! Engine behavior, including tie-breaks, depends on move enumeration
//! order being stable: legal moves are always produced by filtering
//! `Move::ALL` in its declared order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A legal-move list.
///
/// At most five moves exist on the grid, so the list never leaves the
/// stack.
pub type MoveList = SmallVec<[Move; 5]>;

/// One agent move. `Stop` keeps the agent in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    North,
    South,
    East,
    West,
    Stop,
}

impl Move {
    /// All moves, in the canonical enumeration order.
    pub const ALL: [Move; 5] = [Move::North, Move::South, Move::East, Move::West, Move::Stop];

    /// Grid displacement of this move. Rows grow southward, so `North`
    /// is `(0, -1)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::North => (0, -1),
            Move::South => (0, 1),
            Move::East => (1, 0),
            Move::West => (-1, 0),
            Move::Stop => (0, 0),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::North => "North",
            Move::South => "South",
            Move::East => "East",
            Move::West => "West",
            Move::Stop => "Stop",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_unit_steps() {
        for mv in Move::ALL {
            let (dx, dy) = mv.delta();
            assert!(dx.abs() + dy.abs() <= 1);
        }
        assert_eq!(Move::Stop.delta(), (0, 0));
    }

    #[test]
    fn test_enumeration_order_is_fixed() {
        assert_eq!(Move::ALL[0], Move::North);
        assert_eq!(Move::ALL[4], Move::Stop);
    }

    #[test]
    fn test_move_serialization() {
        let json = serde_json::to_string(&Move::East).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Move::East);
    }
}
