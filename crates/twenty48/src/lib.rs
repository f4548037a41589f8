//! Pure game logic for the 2048 sliding-tile merging puzzle.
//!
//! The [`Board`] owns an N×N grid of [`Cell`]s and exposes the four core
//! operations: a directional slide-and-merge pass, a random tile spawn, a
//! terminal-state check, and a reset. Randomness is injected through a
//! [`rand::Rng`] bound so games are reproducible under a seeded generator.
//!
//! Rendering, input handling, and dialogs live in the `twenty48_tui`
//! crate; this crate has no UI dependencies.

#![warn(missing_docs)]

mod board;
mod types;

pub use board::{Board, BoardError, MAX_SIZE, MIN_SIZE, SPAWN_TILE, WIN_TILE};
pub use types::{Cell, Direction, GameStatus, ShiftPass};
