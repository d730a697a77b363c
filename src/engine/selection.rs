//! Selection tracking
//!
//! Letters picked by the player accumulate in order. Every pick must share
//! the row or the column of the first pick; a pick that does neither wipes
//! the whole selection, itself included. After each pick the selection is
//! checked against the words still hidden.

use crate::core::Position;

/// One picked cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedCell {
    pub position: Position,
    pub letter: char,
}

/// What a single pick did to the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Letter added; no word completed yet
    Appended,
    /// Pick left the anchor's row and column, selection cleared
    Reset,
    /// Selection spelled a remaining word, which was removed
    Found(String),
}

/// In-progress selection buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    cells: Vec<SelectedCell>,
}

impl SelectionTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Position of the first pick, if any
    #[must_use]
    pub fn anchor(&self) -> Option<Position> {
        self.cells.first().map(|cell| cell.position)
    }

    /// Append a pick, applying the same-row-or-column rule
    ///
    /// Returns `false` if the pick broke the rule and the selection was
    /// cleared.
    pub fn append(&mut self, position: Position, letter: char) -> bool {
        let anchor = self.anchor();
        self.cells.push(SelectedCell { position, letter });

        match anchor {
            Some(anchor) if !anchor.shares_line_with(position) => {
                self.clear();
                false
            }
            _ => true,
        }
    }

    /// Drop the most recent pick; no-op when empty
    pub fn delete_last(&mut self) -> Option<SelectedCell> {
        self.cells.pop()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<char> {
        self.cells.get(index).map(|cell| cell.letter)
    }

    #[must_use]
    pub fn cells(&self) -> &[SelectedCell] {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.iter().any(|cell| cell.position == position)
    }

    /// Selected letters joined in pick order
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().map(|cell| cell.letter).collect()
    }

    /// Match the selection against `remaining`
    ///
    /// On an exact match the word is removed from `remaining`, the selection
    /// is cleared and the word returned. Otherwise nothing changes.
    pub fn resolve(&mut self, remaining: &mut Vec<String>) -> Option<String> {
        if self.cells.is_empty() {
            return None;
        }

        let candidate = self.text();
        let index = remaining.iter().position(|word| *word == candidate)?;

        self.clear();
        Some(remaining.remove(index))
    }

    /// Append then resolve, the way every player pick is handled
    pub fn select(
        &mut self,
        position: Position,
        letter: char,
        remaining: &mut Vec<String>,
    ) -> SelectOutcome {
        if !self.append(position, letter) {
            return SelectOutcome::Reset;
        }

        self.resolve(remaining)
            .map_or(SelectOutcome::Appended, SelectOutcome::Found)
    }
}
