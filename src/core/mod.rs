//! Core domain types for word search puzzles
//!
//! Board geometry, difficulty settings and the error type. Nothing here
//! touches randomness beyond drawing an orientation.

mod difficulty;
mod error;
mod grid;
mod orientation;
mod placement;

pub use difficulty::{BoardConfig, Difficulty};
pub use error::PuzzleError;
pub use grid::{Cell, Grid, Position};
pub use orientation::Orientation;
pub use placement::Placement;

/// Letters used to fill cells not covered by a hidden word
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
