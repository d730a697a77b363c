//! Square letter grid
//!
//! The board is a flat row-major vector of cells. A cell is either still
//! empty (during generation) or holds one uppercase letter.

use super::{Orientation, Placement, PuzzleError};
use std::fmt;

/// A (row, column) coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether `other` lies in the same row or the same column
    #[inline]
    #[must_use]
    pub const fn shares_line_with(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Not yet written by placement or fill
    #[default]
    Empty,
    Letter(char),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Letter(c) => Some(c),
        }
    }
}

/// An N x N board of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a board with every cell empty
    ///
    /// # Panics
    /// Panics if `size * size` overflows. The placement engine rejects
    /// oversized boards before calling this.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get a cell, or `None` when off the board
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos)
            .then(|| self.cells[pos.row * self.size + pos.col])
    }

    /// Get the letter at a position
    ///
    /// # Errors
    /// Returns `PuzzleError::OutOfBounds` if the position is off the board.
    /// An empty cell (only possible before fill) reads as `None`.
    pub fn letter_at(&self, pos: Position) -> Result<Option<char>, PuzzleError> {
        self.get(pos).map(Cell::letter).ok_or(PuzzleError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            size: self.size,
        })
    }

    /// Overwrite a cell
    ///
    /// # Panics
    /// Panics if the position is off the board.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        assert!(self.contains(pos), "position {pos} is off the board");
        self.cells[pos.row * self.size + pos.col] = cell;
    }

    /// Iterate over the positions of cells that are still empty
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
    }

    /// True once every cell holds a letter
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Borrow one row of cells
    ///
    /// # Panics
    /// Panics if `row >= size`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over the rows of the board
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on zero, and a 0x0 board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Whether `word` is spelled at `anchor` in `orientation`
    #[must_use]
    pub fn spells(&self, word: &str, orientation: Orientation, anchor: Position) -> bool {
        let length = word.chars().count();
        orientation.fits(anchor, length, self.size)
            && word.chars().enumerate().all(|(i, ch)| {
                self.get(orientation.step(anchor, i)).and_then(Cell::letter) == Some(ch)
            })
    }

    /// Find the first in-line occurrence of `word`, scanning rows top to
    /// bottom and trying each orientation at every cell
    ///
    /// # Examples
    /// ```
    /// use word_search::core::{Cell, Grid, Orientation, Position};
    ///
    /// let mut grid = Grid::new(4);
    /// for (i, ch) in "JAVA".chars().enumerate() {
    ///     grid.set(Position::new(3 - i, 1), Cell::Letter(ch));
    /// }
    ///
    /// let found = grid.locate("JAVA").unwrap();
    /// assert_eq!(found.anchor, Position::new(3, 1));
    /// assert_eq!(found.orientation, Orientation::Up);
    /// ```
    #[must_use]
    pub fn locate(&self, word: &str) -> Option<Placement> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Position::new(row, col)))
            .find_map(|anchor| {
                Orientation::ALL
                    .into_iter()
                    .find(|&orientation| self.spells(word, orientation, anchor))
                    .map(|orientation| Placement::new(word, orientation, anchor))
            })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.letter().unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
