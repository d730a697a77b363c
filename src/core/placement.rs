//! Word placements
//!
//! A placement records where a word was written: its orientation and the
//! anchor cell holding its first letter.

use super::{Orientation, Position};
use std::fmt;

/// Where a word sits on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub orientation: Orientation,
    pub anchor: Position,
}

impl Placement {
    #[must_use]
    pub fn new(word: impl Into<String>, orientation: Orientation, anchor: Position) -> Self {
        Self {
            word: word.into(),
            orientation,
            anchor,
        }
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Whether the whole word lies on a `size`x`size` board
    #[must_use]
    pub fn fits(&self, size: usize) -> bool {
        self.orientation.fits(self.anchor, self.len(), size)
    }

    /// Cells covered by the word, first letter first
    ///
    /// # Panics
    /// Panics if the word runs past row or column 0; check [`Self::fits`]
    /// first for placements that did not come from the engine.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let reach = self.len().saturating_sub(1);
        let on_board = match self.orientation {
            Orientation::Up => self.anchor.row >= reach,
            Orientation::Left => self.anchor.col >= reach,
            Orientation::Right | Orientation::Down => true,
        };
        assert!(on_board, "{self} runs off the board");

        (0..self.len()).map(|i| self.orientation.step(self.anchor, i))
    }

    /// Cells paired with the letter written there
    ///
    /// # Panics
    /// Same as [`Self::positions`].
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.positions().zip(self.word.chars())
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} going {}", self.word, self.anchor, self.orientation)
    }
}
