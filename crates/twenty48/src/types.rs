//! Core domain types for the 2048 puzzle.

use serde::{Deserialize, Serialize};

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a tile value (a power of two, 2 or greater).
    Tile(u32),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the tile value, or `None` for an empty cell.
    pub fn value(self) -> Option<u32> {
        match self {
            Cell::Empty => None,
            Cell::Tile(v) => Some(v),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// A direction to slide and merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the top edge.
    Up,
    /// Toward the bottom edge.
    Down,
    /// Toward the left edge.
    Left,
    /// Toward the right edge.
    Right,
}

impl Direction {
    /// Returns the unit `(row, col)` step for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// All four directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Current status of a game, as reported by [`Board::step`](crate::Board::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Playing,
    /// A merge reached the winning tile.
    Won,
    /// Board is full with no adjacent equal pair.
    Lost,
}

/// Result of one slide-and-merge pass over the grid, without a spawn.
///
/// Exposed separately from [`Board::step`](crate::Board::step) so the
/// mechanics can be tested deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPass {
    /// Whether any tile slid or merged during the pass.
    pub moved: bool,
    /// Whether a merge produced the winning tile, aborting the pass.
    pub won: bool,
}
