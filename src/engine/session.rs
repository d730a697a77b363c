//! Puzzle session
//!
//! Owns one board, the words still hidden in it and the player's current
//! selection. All generation is delegated to the catalog and the placement
//! engine; all selection handling to the tracker.

use super::placement::{PlacementConfig, WordPlacementEngine};
use super::selection::{SelectOutcome, SelectionTracker};
use crate::core::{BoardConfig, Difficulty, Grid, Position, PuzzleError};
use crate::wordlists::WordCatalog;
use rand::Rng;

/// A single word search game
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    catalog: WordCatalog,
    engine: WordPlacementEngine,
    config: BoardConfig,
    grid: Grid,
    remaining: Vec<String>,
    found: Vec<String>,
    selection: SelectionTracker,
}

impl PuzzleSession {
    /// Start a session at one of the fixed difficulty tiers
    ///
    /// # Errors
    /// Returns a configuration error if the catalog cannot supply the
    /// tier's words or they cannot be placed.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_search::core::Difficulty;
    /// use word_search::engine::PuzzleSession;
    /// use word_search::wordlists::WordCatalog;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let session = PuzzleSession::new(WordCatalog::builtin(), Difficulty::Easy, &mut rng).unwrap();
    ///
    /// assert_eq!(session.board_size(), 15);
    /// assert_eq!(session.remaining_count(), 4);
    /// assert!(!session.is_complete());
    /// ```
    pub fn new<R: Rng + ?Sized>(
        catalog: WordCatalog,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        Self::with_config(catalog, difficulty.config(), rng)
    }

    /// Start a session with explicit board parameters
    ///
    /// # Errors
    /// Returns a configuration error if the catalog cannot supply
    /// `word_count` words or they cannot be placed on the board.
    pub fn with_config<R: Rng + ?Sized>(
        catalog: WordCatalog,
        config: BoardConfig,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        Self::with_engine(catalog, WordPlacementEngine::default(), config, rng)
    }

    /// Start a session with a custom placement engine
    ///
    /// # Errors
    /// Same as [`Self::with_config`].
    pub fn with_engine<R: Rng + ?Sized>(
        catalog: WordCatalog,
        engine: WordPlacementEngine,
        config: BoardConfig,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let mut session = Self {
            catalog,
            engine,
            config,
            grid: Grid::new(0),
            remaining: Vec::new(),
            found: Vec::new(),
            selection: SelectionTracker::new(),
        };
        session.initialize_with(config, rng)?;
        Ok(session)
    }

    /// Replace the board with a fresh one at `difficulty`
    ///
    /// # Errors
    /// See [`Self::initialize_with`].
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(), PuzzleError> {
        self.initialize_with(difficulty.config(), rng)
    }

    /// Replace the board with a fresh one built from `config`
    ///
    /// On error the current board is left untouched.
    ///
    /// # Errors
    /// Returns `PuzzleError::NotEnoughWords`, `WordTooLong`, `GridTooCrowded`
    /// or `PlacementExhausted`.
    pub fn initialize_with<R: Rng + ?Sized>(
        &mut self,
        config: BoardConfig,
        rng: &mut R,
    ) -> Result<(), PuzzleError> {
        let words = self.catalog.sample(config.word_count, rng)?;
        let board = self.engine.generate(config.grid_size, &words, rng)?;

        log::info!(
            "New {0}x{0} puzzle hiding {1} words in {2} attempts",
            config.grid_size,
            words.len(),
            board.total_attempts()
        );

        self.config = config;
        self.grid = board.grid;
        self.remaining = words;
        self.found.clear();
        self.selection.clear();
        Ok(())
    }

    /// Restart with the same board parameters
    ///
    /// # Errors
    /// See [`Self::initialize_with`].
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PuzzleError> {
        self.initialize_with(self.config, rng)
    }

    /// Pick the cell at (`row`, `col`)
    ///
    /// # Errors
    /// Returns `PuzzleError::OutOfBounds` if the cell is off the board; the
    /// selection is unchanged in that case.
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<SelectOutcome, PuzzleError> {
        let position = Position::new(row, col);
        let letter = self.letter(position)?;

        let outcome = self
            .selection
            .select(position, letter, &mut self.remaining);

        if let SelectOutcome::Found(word) = &outcome {
            log::info!("Found {word}, {} left", self.remaining.len());
            self.found.push(word.clone());
        }

        Ok(outcome)
    }

    /// Remove the most recent letter from the selection
    pub fn delete_last(&mut self) {
        self.selection.delete_last();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Letter at (`row`, `col`)
    ///
    /// # Errors
    /// Returns `PuzzleError::OutOfBounds` if the cell is off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<char, PuzzleError> {
        self.letter(Position::new(row, col))
    }

    fn letter(&self, position: Position) -> Result<char, PuzzleError> {
        // A session only exists once its grid is filled
        self.grid
            .letter_at(position)?
            .ok_or(PuzzleError::UnfilledCell {
                row: position.row,
                col: position.col,
            })
    }

    #[must_use]
    pub const fn board_size(&self) -> usize {
        self.grid.size()
    }

    #[must_use]
    pub const fn config(&self) -> BoardConfig {
        self.config
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn placement_config(&self) -> &PlacementConfig {
        self.engine.config()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn remaining_word_at(&self, index: usize) -> Option<&str> {
        self.remaining.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn remaining_words(&self) -> &[String] {
        &self.remaining
    }

    /// Words found so far, in the order they were found
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    #[must_use]
    pub fn selection_letter_at(&self, index: usize) -> Option<char> {
        self.selection.letter_at(index)
    }

    #[must_use]
    pub fn current_selection_text(&self) -> String {
        self.selection.text()
    }

    /// True once every hidden word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn session(difficulty: Difficulty, seed: u64) -> PuzzleSession {
        let mut rng = StdRng::seed_from_u64(seed);
        PuzzleSession::new(WordCatalog::builtin(), difficulty, &mut rng).unwrap()
    }

    fn spell(session: &mut PuzzleSession, word: &str) -> Vec<SelectOutcome> {
        let placement = session.grid().locate(word).unwrap();
        placement
            .positions()
            .map(|pos| session.select_cell(pos.row, pos.col).unwrap())
            .collect()
    }

    #[test]
    fn initialize_matches_tier() {
        for difficulty in Difficulty::ALL {
            let session = session(difficulty, 1);
            let config = difficulty.config();

            assert_eq!(session.board_size(), config.grid_size);
            assert_eq!(session.remaining_count(), config.word_count);
            assert!(session.grid().is_filled());

            let unique: FxHashSet<&String> = session.remaining_words().iter().collect();
            assert_eq!(unique.len(), config.word_count);
            assert!(
                session
                    .remaining_words()
                    .iter()
                    .all(|w| session.catalog().contains(w))
            );
        }
    }

    #[test]
    fn every_cell_is_uppercase() {
        let session = session(Difficulty::Medium, 5);
        let size = session.board_size();
        for row in 0..size {
            for col in 0..size {
                assert!(session.cell_at(row, col).unwrap().is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let session = session(Difficulty::Easy, 2);
        assert_eq!(
            session.cell_at(15, 0),
            Err(PuzzleError::OutOfBounds {
                row: 15,
                col: 0,
                size: 15
            })
        );
    }

    #[test]
    fn unfilled_cell_is_not_out_of_bounds() {
        let mut session = session(Difficulty::Easy, 2);
        session.grid = Grid::new(15);

        assert_eq!(
            session.cell_at(3, 4),
            Err(PuzzleError::UnfilledCell { row: 3, col: 4 })
        );
        assert!(session.select_cell(3, 4).is_err());
        assert_eq!(session.selection_len(), 0);
    }

    #[test]
    fn select_cell_out_of_bounds_leaves_selection() {
        let mut session = session(Difficulty::Easy, 2);
        session.select_cell(0, 0).unwrap();
        assert!(session.select_cell(0, 99).is_err());
        assert_eq!(session.selection_len(), 1);
    }

    #[test]
    fn spelling_a_word_removes_it() {
        let mut session = session(Difficulty::Easy, 3);
        let word = session.remaining_word_at(0).unwrap().to_string();

        let outcomes = spell(&mut session, &word);

        assert_eq!(outcomes.last(), Some(&SelectOutcome::Found(word.clone())));
        assert_eq!(session.remaining_count(), 3);
        assert!(!session.remaining_words().contains(&word));
        assert_eq!(session.found_words(), &[word]);
        assert_eq!(session.selection_len(), 0);
    }

    #[test]
    fn off_line_selection_resets() {
        let mut session = session(Difficulty::Easy, 4);
        session.select_cell(2, 2).unwrap();
        let outcome = session.select_cell(3, 3).unwrap();

        assert_eq!(outcome, SelectOutcome::Reset);
        assert_eq!(session.selection_len(), 0);
        assert_eq!(session.current_selection_text(), "");
    }

    #[test]
    fn delete_last_and_clear() {
        let mut session = session(Difficulty::Easy, 6);
        session.delete_last();
        assert_eq!(session.selection_len(), 0);

        session.select_cell(0, 0).unwrap();
        session.select_cell(0, 1).unwrap();
        let before = session.current_selection_text();

        session.delete_last();
        assert_eq!(session.selection_len(), 1);
        assert_eq!(session.current_selection_text(), &before[..1]);
        assert_eq!(session.selection_letter_at(0), session.cell_at(0, 0).ok());

        session.clear_selection();
        session.clear_selection();
        assert_eq!(session.selection_len(), 0);
    }

    #[test]
    fn finding_all_words_completes() {
        let mut session = session(Difficulty::Easy, 7);
        let words: Vec<String> = session.remaining_words().to_vec();

        for word in &words {
            spell(&mut session, word);
        }

        assert!(session.is_complete());
        assert_eq!(session.found_words(), words.as_slice());
    }

    #[test]
    fn restart_replaces_board() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut session =
            PuzzleSession::new(WordCatalog::builtin(), Difficulty::Easy, &mut rng).unwrap();
        let word = session.remaining_word_at(0).unwrap().to_string();
        spell(&mut session, &word);
        session.select_cell(0, 0).unwrap();

        session.initialize(Difficulty::Hard, &mut rng).unwrap();

        assert_eq!(session.board_size(), 25);
        assert_eq!(session.remaining_count(), 12);
        assert!(session.found_words().is_empty());
        assert_eq!(session.selection_len(), 0);

        session.restart(&mut rng).unwrap();
        assert_eq!(session.config(), Difficulty::Hard.config());
    }

    #[test]
    fn infeasible_config_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let catalog = WordCatalog::new(["VULNERABILITY"]).unwrap();

        let result = PuzzleSession::with_config(catalog.clone(), BoardConfig::new(10, 1), &mut rng);
        assert!(matches!(result, Err(PuzzleError::WordTooLong { .. })));

        let result = PuzzleSession::with_config(catalog, BoardConfig::new(20, 2), &mut rng);
        assert!(matches!(result, Err(PuzzleError::NotEnoughWords { .. })));
    }

    #[test]
    fn custom_engine_is_kept() {
        let mut rng = StdRng::seed_from_u64(13);
        let engine = WordPlacementEngine::new(PlacementConfig {
            max_attempts: 500,
            ..PlacementConfig::default()
        });
        let session = PuzzleSession::with_engine(
            WordCatalog::builtin(),
            engine,
            Difficulty::Easy.config(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(session.placement_config().max_attempts, 500);
    }

    #[test]
    fn failed_initialize_keeps_board() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut session =
            PuzzleSession::new(WordCatalog::builtin(), Difficulty::Easy, &mut rng).unwrap();
        let words = session.remaining_words().to_vec();

        assert!(
            session
                .initialize_with(BoardConfig::new(15, 100), &mut rng)
                .is_err()
        );
        assert_eq!(session.remaining_words(), words.as_slice());
        assert_eq!(session.board_size(), 15);
    }

    #[test]
    fn failed_generation_keeps_board() {
        let mut rng = StdRng::seed_from_u64(14);
        let catalog = WordCatalog::new(["JAVA", "LINUX", "VULNERABILITY"]).unwrap();
        let mut session =
            PuzzleSession::with_config(catalog, BoardConfig::new(15, 3), &mut rng).unwrap();
        session.select_cell(0, 0).unwrap();

        let grid = session.grid().clone();
        let words = session.remaining_words().to_vec();

        // Sampling succeeds; validation rejects VULNERABILITY on a 10x10 board
        let result = session.initialize_with(BoardConfig::new(10, 3), &mut rng);
        assert!(matches!(result, Err(PuzzleError::WordTooLong { .. })));

        assert_eq!(session.grid(), &grid);
        assert_eq!(session.remaining_words(), words.as_slice());
        assert_eq!(session.selection_len(), 1);
        assert_eq!(session.config(), BoardConfig::new(15, 3));
    }

    #[test]
    fn exhausted_placement_keeps_board() {
        // One draw per word: JAVA fits a 4x4 board from a quarter of the draws
        let engine = WordPlacementEngine::new(PlacementConfig {
            max_attempts: 1,
            max_density: 1.0,
            ..PlacementConfig::default()
        });
        let catalog = WordCatalog::new(["JAVA"]).unwrap();
        let config = BoardConfig::new(4, 1);
        let mut rng = StdRng::seed_from_u64(15);

        let mut session = (0..200)
            .find_map(|_| {
                PuzzleSession::with_engine(catalog.clone(), engine.clone(), config, &mut rng).ok()
            })
            .unwrap();

        let mut failures = 0;
        for _ in 0..200 {
            let grid = session.grid().clone();
            match session.restart(&mut rng) {
                Ok(()) => {}
                Err(err) => {
                    assert_eq!(
                        err,
                        PuzzleError::PlacementExhausted {
                            word: "JAVA".to_string(),
                            attempts: 1
                        }
                    );
                    assert_eq!(session.grid(), &grid);
                    assert_eq!(session.remaining_words(), ["JAVA"]);
                    failures += 1;
                }
            }
        }
        assert!(failures > 0);
    }
}
