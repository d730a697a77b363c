//! Word orientations
//!
//! Words run in one of four straight lines from their anchor cell. Diagonals
//! are not used.

use super::Position;
use rand::Rng;
use std::fmt;

/// Direction a word is written in, starting at its anchor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Vertical, towards row 0
    Up,
    /// Horizontal, towards the last column
    Right,
    /// Vertical, towards the last row
    Down,
    /// Horizontal, towards column 0
    Left,
}

impl Orientation {
    /// All orientations in draw order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Draw an orientation uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Check that a word of `length` letters anchored at `anchor` stays on an
    /// `size`x`size` board
    ///
    /// # Examples
    /// ```
    /// use word_search::core::{Orientation, Position};
    ///
    /// let anchor = Position::new(3, 10);
    /// assert!(Orientation::Up.fits(anchor, 4, 15));
    /// assert!(!Orientation::Up.fits(anchor, 5, 15));
    /// assert!(Orientation::Right.fits(anchor, 5, 15));
    /// assert!(!Orientation::Right.fits(anchor, 6, 15));
    /// ```
    #[must_use]
    pub const fn fits(self, anchor: Position, length: usize, size: usize) -> bool {
        if length == 0 || anchor.row >= size || anchor.col >= size {
            return false;
        }

        match self {
            Self::Up => anchor.row + 1 >= length,
            Self::Right => anchor.col + length <= size,
            Self::Down => anchor.row + (length - 1) < size,
            Self::Left => anchor.col + 1 >= length,
        }
    }

    /// Position of the `index`-th letter of a word anchored at `anchor`
    ///
    /// Callers must have checked [`Orientation::fits`] first.
    ///
    /// # Panics
    /// Panics on underflow when stepping `Up` or `Left` past row or column 0.
    #[inline]
    #[must_use]
    pub const fn step(self, anchor: Position, index: usize) -> Position {
        match self {
            Self::Up => Position::new(anchor.row - index, anchor.col),
            Self::Right => Position::new(anchor.row, anchor.col + index),
            Self::Down => Position::new(anchor.row + index, anchor.col),
            Self::Left => Position::new(anchor.row, anchor.col - index),
        }
    }

    /// Short lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn up_bounds() {
        // r - (L - 1) >= 0
        assert!(Orientation::Up.fits(Position::new(3, 0), 4, 10));
        assert!(!Orientation::Up.fits(Position::new(2, 0), 4, 10));
    }

    #[test]
    fn right_bounds() {
        // c + L <= N
        assert!(Orientation::Right.fits(Position::new(0, 6), 4, 10));
        assert!(!Orientation::Right.fits(Position::new(0, 7), 4, 10));
    }

    #[test]
    fn down_bounds() {
        // r + (L - 1) < N
        assert!(Orientation::Down.fits(Position::new(6, 0), 4, 10));
        assert!(!Orientation::Down.fits(Position::new(7, 0), 4, 10));
    }

    #[test]
    fn left_bounds() {
        // c - (L - 1) >= 0
        assert!(Orientation::Left.fits(Position::new(0, 3), 4, 10));
        assert!(!Orientation::Left.fits(Position::new(0, 2), 4, 10));
    }

    #[test]
    fn anchor_off_board_never_fits() {
        for orientation in Orientation::ALL {
            assert!(!orientation.fits(Position::new(10, 0), 1, 10));
            assert!(!orientation.fits(Position::new(0, 10), 1, 10));
        }
    }

    #[test]
    fn step_directions() {
        let anchor = Position::new(5, 5);
        assert_eq!(Orientation::Up.step(anchor, 2), Position::new(3, 5));
        assert_eq!(Orientation::Right.step(anchor, 2), Position::new(5, 7));
        assert_eq!(Orientation::Down.step(anchor, 2), Position::new(7, 5));
        assert_eq!(Orientation::Left.step(anchor, 2), Position::new(5, 3));
        assert_eq!(Orientation::Left.step(anchor, 0), anchor);
    }

    #[test]
    fn random_covers_all_orientations() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let orientation = Orientation::random(&mut rng);
            let index = Orientation::ALL
                .iter()
                .position(|&o| o == orientation)
                .unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
