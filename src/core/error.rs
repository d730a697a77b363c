//! Puzzle error type
//!
//! Every failure the engine can report. Configuration problems are caught
//! before generation starts so the bounded placement loop is the last line,
//! not the first.

use std::fmt;

/// Error type for puzzle configuration, generation and cell access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// More words were requested than the catalog holds
    NotEnoughWords { requested: usize, available: usize },
    /// A word cannot fit on the board in any orientation
    WordTooLong { word: String, grid_size: usize },
    /// The board side exceeds the configured limit
    GridTooLarge { grid_size: usize, max: usize },
    /// The words together would fill too much of the board
    GridTooCrowded { letters: usize, capacity: usize },
    /// A catalog word is empty or contains something other than A-Z
    InvalidWord(String),
    /// A catalog word appears more than once
    DuplicateWord(String),
    /// Random placement gave up after the configured number of attempts
    PlacementExhausted { word: String, attempts: usize },
    /// Difficulty name not recognized
    UnknownDifficulty(String),
    /// A coordinate outside the board
    OutOfBounds { row: usize, col: usize, size: usize },
    /// A cell was read before the board was filled
    UnfilledCell { row: usize, col: usize },
}

impl PuzzleError {
    /// Whether this error stems from configuration rather than board access
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, Self::OutOfBounds { .. } | Self::UnfilledCell { .. })
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughWords {
                requested,
                available,
            } => write!(
                f,
                "Requested {requested} words but the catalog only has {available}"
            ),
            Self::WordTooLong { word, grid_size } => write!(
                f,
                "Word '{word}' ({} letters) does not fit on a {grid_size}x{grid_size} board",
                word.len()
            ),
            Self::GridTooLarge { grid_size, max } => write!(
                f,
                "A {grid_size}x{grid_size} board is larger than the {max}x{max} limit"
            ),
            Self::GridTooCrowded { letters, capacity } => write!(
                f,
                "{letters} letters is too many for a board of {capacity} cells"
            ),
            Self::InvalidWord(word) => {
                write!(f, "Word '{word}' must contain only letters A-Z")
            }
            Self::DuplicateWord(word) => write!(f, "Word '{word}' appears more than once"),
            Self::PlacementExhausted { word, attempts } => write!(
                f,
                "Could not place '{word}' after {attempts} attempts"
            ),
            Self::UnknownDifficulty(name) => write!(
                f,
                "Unknown difficulty '{name}' (expected easy, medium or hard)"
            ),
            Self::OutOfBounds { row, col, size } => write!(
                f,
                "Cell ({row}, {col}) is outside the {size}x{size} board"
            ),
            Self::UnfilledCell { row, col } => {
                write!(f, "Cell ({row}, {col}) has not been filled yet")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}
