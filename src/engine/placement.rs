//! Random word placement
//!
//! Each word is dropped onto the board at a random anchor in a random
//! orientation until it lands fully on the board without touching any cell
//! another word already wrote. Words never share cells, even where the
//! letters would agree. Whatever is still empty afterwards gets a random
//! letter.

use crate::core::{ALPHABET, Cell, Grid, Orientation, Placement, Position, PuzzleError};
use rand::Rng;

/// Tuning for the placement loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Random draws allowed per word before giving up
    pub max_attempts: usize,
    /// Largest share of the board the hidden words may cover
    pub max_density: f64,
    /// Largest board side accepted
    pub max_grid_size: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
            max_density: 0.5,
            max_grid_size: 200,
        }
    }
}

/// A word written to the board, with the number of draws it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub placement: Placement,
    pub attempts: usize,
}

/// A freshly generated, fully filled board
#[derive(Debug, Clone)]
pub struct GeneratedBoard {
    pub grid: Grid,
    pub placements: Vec<PlacedWord>,
}

impl GeneratedBoard {
    /// Total random draws across all words
    #[must_use]
    pub fn total_attempts(&self) -> usize {
        self.placements.iter().map(|p| p.attempts).sum()
    }
}

/// Places words on a board and fills the remainder
#[derive(Debug, Clone, Default)]
pub struct WordPlacementEngine {
    config: PlacementConfig,
}

impl WordPlacementEngine {
    #[must_use]
    pub const fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Reject word sets that cannot reasonably be placed
    ///
    /// # Errors
    /// Returns `PuzzleError::GridTooLarge` if the board side exceeds
    /// `max_grid_size`, `PuzzleError::WordTooLong` if a word is longer than
    /// the board side, or `PuzzleError::GridTooCrowded` if the words would
    /// cover more than `max_density` of the board.
    pub fn validate(&self, words: &[String], grid_size: usize) -> Result<(), PuzzleError> {
        let too_large = PuzzleError::GridTooLarge {
            grid_size,
            max: self.config.max_grid_size,
        };
        if grid_size > self.config.max_grid_size {
            return Err(too_large);
        }
        let capacity = grid_size.checked_mul(grid_size).ok_or(too_large)?;

        if let Some(word) = words.iter().find(|w| w.chars().count() > grid_size) {
            return Err(PuzzleError::WordTooLong {
                word: word.clone(),
                grid_size,
            });
        }

        let letters: usize = words.iter().map(|w| w.chars().count()).sum();
        if letters as f64 > capacity as f64 * self.config.max_density {
            return Err(PuzzleError::GridTooCrowded { letters, capacity });
        }

        Ok(())
    }

    /// Validate, place every word, then fill the rest of the board
    ///
    /// # Errors
    /// Returns a configuration error from [`Self::validate`], or
    /// `PuzzleError::PlacementExhausted` if a word could not be placed within
    /// the attempt budget.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_search::engine::WordPlacementEngine;
    ///
    /// let words = vec!["JAVA".to_string(), "LINUX".to_string()];
    /// let mut rng = StdRng::seed_from_u64(3);
    ///
    /// let board = WordPlacementEngine::default()
    ///     .generate(10, &words, &mut rng)
    ///     .unwrap();
    /// assert!(board.grid.is_filled());
    /// assert!(board.grid.locate("JAVA").is_some());
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        &self,
        grid_size: usize,
        words: &[String],
        rng: &mut R,
    ) -> Result<GeneratedBoard, PuzzleError> {
        self.validate(words, grid_size)?;

        let mut grid = Grid::new(grid_size);
        let placements = self.place(&mut grid, words, rng)?;
        fill(&mut grid, rng);

        Ok(GeneratedBoard { grid, placements })
    }

    /// Place each word in list order
    ///
    /// # Errors
    /// Returns `PuzzleError::PlacementExhausted` for the first word that does
    /// not fit within the attempt budget.
    pub fn place<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        words: &[String],
        rng: &mut R,
    ) -> Result<Vec<PlacedWord>, PuzzleError> {
        words
            .iter()
            .map(|word| self.place_word(grid, word, rng))
            .collect()
    }

    /// Place a single word by repeated random draws
    ///
    /// # Errors
    /// Returns `PuzzleError::PlacementExhausted` once `max_attempts` draws
    /// have failed.
    pub fn place_word<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &str,
        rng: &mut R,
    ) -> Result<PlacedWord, PuzzleError> {
        let size = grid.size();

        for attempt in 1..=self.config.max_attempts {
            if size == 0 {
                break;
            }

            let orientation = Orientation::random(rng);
            let anchor = Position::new(rng.random_range(0..size), rng.random_range(0..size));

            if can_place(grid, word, orientation, anchor) {
                let placement = Placement::new(word, orientation, anchor);
                write(grid, &placement);
                log::debug!("Placed {placement} after {attempt} attempts");

                return Ok(PlacedWord {
                    placement,
                    attempts: attempt,
                });
            }
        }

        log::warn!(
            "Gave up placing {word} after {} attempts",
            self.config.max_attempts
        );
        Err(PuzzleError::PlacementExhausted {
            word: word.to_string(),
            attempts: self.config.max_attempts,
        })
    }
}

/// Bounds check followed by the overwrite check
///
/// Every cell the word would cover must lie on the board and still be empty.
#[must_use]
pub fn can_place(grid: &Grid, word: &str, orientation: Orientation, anchor: Position) -> bool {
    let length = word.chars().count();

    orientation.fits(anchor, length, grid.size())
        && (0..length).all(|i| {
            grid.get(orientation.step(anchor, i))
                .is_some_and(Cell::is_empty)
        })
}

fn write(grid: &mut Grid, placement: &Placement) {
    for (pos, ch) in placement.letters() {
        grid.set(pos, Cell::Letter(ch));
    }
}

/// Give every empty cell a uniformly random letter
pub fn fill<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let empty: Vec<Position> = grid.empty_positions().collect();

    for pos in empty {
        let letter = ALPHABET[rng.random_range(0..ALPHABET.len())];
        grid.set(pos, Cell::Letter(char::from(letter)));
    }
}
