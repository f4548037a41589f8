//! The N×N board and its slide, merge, spawn, and reset operations.
//!
//! The slide-and-merge pass visits source cells in row-major order and
//! walks each tile one step at a time toward the target edge. A tile can
//! therefore slide or merge more than once within a single pass when a
//! later source cell cascades into it. This scan-order behavior is kept
//! deliberately rather than emulating simultaneous classic-2048 physics.

use std::fmt;

use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::types::{Cell, Direction, GameStatus, ShiftPass};

/// Smallest supported grid size.
pub const MIN_SIZE: usize = 2;
/// Largest supported grid size.
pub const MAX_SIZE: usize = 9;
/// Tile value that ends the game with a win when produced by a merge.
pub const WIN_TILE: u32 = 2048;
/// Value of every newly spawned tile.
pub const SPAWN_TILE: u32 = 2;

/// Errors that can occur when constructing or editing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Requested grid size is outside the supported range.
    #[display("grid size {size} is outside the supported range 2..=9")]
    SizeOutOfRange {
        /// The rejected size.
        size: usize,
    },
    /// Position lies outside the grid.
    #[display("position ({row}, {col}) is out of bounds")]
    PositionOutOfBounds {
        /// Row of the rejected position.
        row: usize,
        /// Column of the rejected position.
        col: usize,
    },
}

/// The N×N grid of cells plus its move, spawn, and reset operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] when `size` is outside
    /// [`MIN_SIZE`]`..=`[`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::SizeOutOfRange { size });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Creates a board of the given size holding two starting 2-tiles in
    /// uniformly random empty cells.
    ///
    /// Every fresh board uses this seeding, whether from construction,
    /// [`reset`](Self::reset), or a grid-size change in the shell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeOutOfRange`] when `size` is outside
    /// [`MIN_SIZE`]`..=`[`MAX_SIZE`].
    #[instrument(skip(rng))]
    pub fn with_start_tiles<R: Rng + ?Sized>(
        size: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(size)?;
        board.spawn_random_tile(rng);
        board.spawn_random_tile(rng);
        Ok(board)
    }

    /// Returns the grid size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at the given position.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Sets the cell at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PositionOutOfBounds`] when the position lies
    /// outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::PositionOutOfBounds { row, col });
        }
        self.cells[row * self.size + col] = cell;
        Ok(())
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts the occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Collects the positions of all empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        let mut empties = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row * self.size + col].is_empty() {
                    empties.push((row, col));
                }
            }
        }
        empties
    }

    /// Returns the largest tile value on the board, or `None` when empty.
    pub fn max_tile(&self) -> Option<u32> {
        self.cells.iter().filter_map(|c| c.value()).max()
    }

    /// Places a 2-tile in a uniformly random empty cell.
    ///
    /// No-op when the board is full.
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empties = self.empty_positions();
        if let Some(&(row, col)) = empties.choose(rng) {
            debug!(row, col, "Spawning tile");
            self.cells[row * self.size + col] = Cell::Tile(SPAWN_TILE);
        }
    }

    /// Performs one slide-and-merge pass in the given direction.
    ///
    /// Source cells are visited in row-major order. Each occupied cell is
    /// walked one step at a time while the next cell is in bounds and
    /// empty, then absorbed into an equal in-bounds neighbor if one stops
    /// the walk. A merge that produces [`WIN_TILE`] aborts the pass
    /// immediately, leaving the remaining source cells unprocessed.
    ///
    /// No tile is spawned; see [`step`](Self::step) for a full move.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn shift(&mut self, dir: Direction) -> ShiftPass {
        let (dr, dc) = dir.delta();
        let n = self.size as isize;
        let mut moved = false;
        for row in 0..n {
            for col in 0..n {
                if self.at(row, col).is_empty() {
                    continue;
                }
                let mut x = row + dr;
                let mut y = col + dc;
                while self.in_bounds(x, y) && self.at(x, y).is_empty() {
                    self.put(x, y, self.at(x - dr, y - dc));
                    self.put(x - dr, y - dc, Cell::Empty);
                    x += dr;
                    y += dc;
                    moved = true;
                }
                // The walk stopped on an occupied neighbor or the edge.
                // An equal in-bounds neighbor absorbs the tile behind it.
                if self.in_bounds(x, y)
                    && let (Cell::Tile(ahead), Cell::Tile(behind)) =
                        (self.at(x, y), self.at(x - dr, y - dc))
                    && ahead == behind
                {
                    let merged = ahead * 2;
                    self.put(x, y, Cell::Tile(merged));
                    self.put(x - dr, y - dc, Cell::Empty);
                    moved = true;
                    if merged == WIN_TILE {
                        debug!(row = x, col = y, "Merge reached the winning tile");
                        return ShiftPass { moved, won: true };
                    }
                }
            }
        }
        ShiftPass { moved, won: false }
    }

    /// Performs one full move: shift, spawn, and terminal check.
    ///
    /// A winning shift returns [`GameStatus::Won`] without spawning. A
    /// board-changing shift spawns one random 2-tile. The stuck check
    /// runs regardless of whether anything moved, so a full stuck board
    /// reports [`GameStatus::Lost`] on any input.
    #[instrument(skip(self, rng), fields(size = self.size))]
    pub fn step<R: Rng + ?Sized>(&mut self, dir: Direction, rng: &mut R) -> GameStatus {
        let pass = self.shift(dir);
        if pass.won {
            return GameStatus::Won;
        }
        if pass.moved {
            self.spawn_random_tile(rng);
        }
        if self.is_stuck() {
            return GameStatus::Lost;
        }
        GameStatus::Playing
    }

    /// Checks whether the board is full with no adjacent equal pair.
    ///
    /// Each cell is compared to its upper and left neighbor. Every
    /// adjacent pair is seen exactly once from its lower or right member,
    /// so on a full board this is equivalent to "no directional move
    /// changes the board".
    pub fn is_stuck(&self) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = self.cells[row * self.size + col];
                if cell.is_empty() {
                    return false;
                }
                if row > 0 && cell == self.cells[(row - 1) * self.size + col] {
                    return false;
                }
                if col > 0 && cell == self.cells[row * self.size + col - 1] {
                    return false;
                }
            }
        }
        true
    }

    /// Clears the board and seeds two random starting 2-tiles.
    #[instrument(skip(self, rng), fields(size = self.size))]
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug!("Resetting board");
        self.cells.fill(Cell::Empty);
        self.spawn_random_tile(rng);
        self.spawn_random_tile(rng);
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    fn at(&self, row: isize, col: isize) -> Cell {
        self.cells[row as usize * self.size + col as usize]
    }

    fn put(&mut self, row: isize, col: isize, cell: Cell) {
        self.cells[row as usize * self.size + col as usize] = cell;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.cells[row * self.size + col] {
                    Cell::Empty => write!(f, "{:>5}", ".")?,
                    Cell::Tile(v) => write!(f, "{v:>5}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
