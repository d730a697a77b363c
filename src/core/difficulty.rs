//! Difficulty tiers and board configuration

use super::PuzzleError;
use std::fmt;
use std::str::FromStr;

/// Board size and number of hidden words for one puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub grid_size: usize,
    pub word_count: usize,
}

impl BoardConfig {
    #[must_use]
    pub const fn new(grid_size: usize, word_count: usize) -> Self {
        Self {
            grid_size,
            word_count,
        }
    }

    /// Total number of cells on the board
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

/// Difficulty chosen once per puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Fixed board parameters for this tier
    ///
    /// # Examples
    /// ```
    /// use word_search::core::Difficulty;
    ///
    /// let config = Difficulty::Easy.config();
    /// assert_eq!(config.grid_size, 15);
    /// assert_eq!(config.word_count, 4);
    /// ```
    #[must_use]
    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Easy => BoardConfig::new(15, 4),
            Self::Medium => BoardConfig::new(20, 8),
            Self::Hard => BoardConfig::new(25, 12),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse a difficulty name, case-insensitively
    ///
    /// Supported names: "easy", "medium", "hard" (and "e", "m", "h")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "easy" | "e" => Some(Self::Easy),
            "medium" | "m" => Some(Self::Medium),
            "hard" | "h" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PuzzleError::UnknownDifficulty(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parameters() {
        assert_eq!(Difficulty::Easy.config(), BoardConfig::new(15, 4));
        assert_eq!(Difficulty::Medium.config(), BoardConfig::new(20, 8));
        assert_eq!(Difficulty::Hard.config(), BoardConfig::new(25, 12));
    }

    #[test]
    fn parse_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("h".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(PuzzleError::UnknownDifficulty("expert".to_string()))
        );
    }

    #[test]
    fn name_round_trips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(difficulty.name()), Some(difficulty));
        }
    }

    #[test]
    fn capacity() {
        assert_eq!(Difficulty::Hard.config().capacity(), 625);
    }
}
