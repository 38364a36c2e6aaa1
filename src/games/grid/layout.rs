//! Text layouts for the grid world.
//!
//! A layout is an ASCII map:
//!
//! ```text
//! %%%%%%%
//! %P..o %
//! % %% G%
//! %%%%%%%
//! ```
//!
//! `%` wall, `.` food, `o` capsule, `P` the player (exactly one), `G` an
//! adversary, space an open cell. Adversaries are numbered 1.. in
//! row-major scan order, which fixes their agent indices.

use rustc_hash::FxHashSet;

use crate::core::Position;

/// Static board geometry and starting entities parsed from text.
#[derive(Clone, Debug)]
pub struct Layout {
    width: usize,
    height: usize,
    walls: FxHashSet<Position>,
    food: Vec<Position>,
    capsules: Vec<Position>,
    player_start: Position,
    adversary_starts: Vec<Position>,
}

/// Why a layout failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// No non-blank lines.
    Empty,
    /// No `P` tile.
    NoPlayer,
    /// More than one `P` tile; the second one is reported.
    DuplicatePlayer { row: usize, col: usize },
    /// A tile character outside the alphabet.
    UnknownTile { row: usize, col: usize, tile: char },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout has no rows"),
            LayoutError::NoPlayer => write!(f, "layout has no player tile"),
            LayoutError::DuplicatePlayer { row, col } => {
                write!(f, "duplicate player tile at row {row}, column {col}")
            }
            LayoutError::UnknownTile { row, col, tile } => {
                write!(f, "unknown tile {tile:?} at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl Layout {
    /// Parse a layout from text. Blank lines are skipped; short rows are
    /// padded with open space.
    pub fn parse(text: &str) -> Result<Layout, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut walls = FxHashSet::default();
        let mut food = Vec::new();
        let mut capsules = Vec::new();
        let mut player_start = None;
        let mut adversary_starts = Vec::new();
        let mut width = 0;

        for (row, line) in rows.iter().enumerate() {
            width = width.max(line.chars().count());
            for (col, tile) in line.chars().enumerate() {
                let pos = Position::new(col as i32, row as i32);
                match tile {
                    '%' => {
                        walls.insert(pos);
                    }
                    '.' => food.push(pos),
                    'o' => capsules.push(pos),
                    'P' => {
                        if player_start.is_some() {
                            return Err(LayoutError::DuplicatePlayer { row, col });
                        }
                        player_start = Some(pos);
                    }
                    'G' => adversary_starts.push(pos),
                    ' ' => {}
                    _ => return Err(LayoutError::UnknownTile { row, col, tile }),
                }
            }
        }

        Ok(Layout {
            width,
            height: rows.len(),
            walls,
            food,
            capsules,
            player_start: player_start.ok_or(LayoutError::NoPlayer)?,
            adversary_starts,
        })
    }

    /// Board width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a cell is blocked.
    #[must_use]
    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }

    /// Starting food positions, in scan order.
    #[must_use]
    pub fn food(&self) -> &[Position] {
        &self.food
    }

    /// Starting capsule positions, in scan order.
    #[must_use]
    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    /// The player's starting cell.
    #[must_use]
    pub fn player_start(&self) -> Position {
        self.player_start
    }

    /// Adversary starting cells, in agent order.
    #[must_use]
    pub fn adversary_starts(&self) -> &[Position] {
        &self.adversary_starts
    }
}
