//! Puzzle generation command
//!
//! Builds a single board without starting a game, for printing or checking
//! a seed.

use crate::core::{BoardConfig, PuzzleError};
use crate::engine::{GeneratedBoard, PlacementConfig, WordPlacementEngine};
use crate::wordlists::WordCatalog;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Configuration for generating one board
pub struct GenerateConfig {
    pub board: BoardConfig,
    pub placement: PlacementConfig,
    pub seed: u64,
}

impl GenerateConfig {
    #[must_use]
    pub fn new(board: BoardConfig, seed: u64) -> Self {
        Self {
            board,
            placement: PlacementConfig::default(),
            seed,
        }
    }
}

/// Result of generating one board
pub struct GenerateResult {
    pub board: GeneratedBoard,
    pub words: Vec<String>,
    pub seed: u64,
    pub duration: Duration,
}

/// Sample words from `catalog` and place them on a new board
///
/// The same seed always yields the same board for a given catalog.
///
/// # Errors
///
/// Returns a configuration error if the catalog is too small for the
/// requested word count or the words cannot be placed.
pub fn generate_puzzle(
    config: &GenerateConfig,
    catalog: &WordCatalog,
) -> Result<GenerateResult, PuzzleError> {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let words = catalog.sample(config.board.word_count, &mut rng)?;
    let board = WordPlacementEngine::new(config.placement).generate(
        config.board.grid_size,
        &words,
        &mut rng,
    )?;

    Ok(GenerateResult {
        board,
        words,
        seed: config.seed,
        duration: start.elapsed(),
    })
}
