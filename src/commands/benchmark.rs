//! Benchmark command
//!
//! Generates many boards to measure how hard placement works for a given
//! board configuration.

use crate::core::{BoardConfig, PuzzleError};
use crate::engine::{PlacementConfig, WordPlacementEngine};
use crate::wordlists::WordCatalog;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub board: BoardConfig,
    pub total_boards: usize,
    pub generated: usize,
    pub failures: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub max_attempts: usize,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate `count` boards in parallel
///
/// Board `i` uses seed `seed + i`, so a run is reproducible regardless of
/// thread scheduling.
pub fn run_benchmark(
    catalog: &WordCatalog,
    board: BoardConfig,
    placement: PlacementConfig,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let engine = WordPlacementEngine::new(placement);

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<Result<usize, PuzzleError>> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let outcome = catalog
                .sample(board.word_count, &mut rng)
                .and_then(|words| engine.generate(board.grid_size, &words, &mut rng))
                .map(|generated| generated.total_attempts());
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let attempts: Vec<usize> = outcomes.iter().filter_map(|o| o.as_ref().ok()).copied().collect();
    if let Some(err) = outcomes.iter().find_map(|o| o.as_ref().err()) {
        log::warn!("Benchmark boards failed, first error: {err}");
    }

    let generated = attempts.len();
    let total_attempts: usize = attempts.iter().sum();

    BenchmarkResult {
        board,
        total_boards: count,
        generated,
        failures: count - generated,
        total_attempts,
        average_attempts: if generated > 0 {
            total_attempts as f64 / generated as f64
        } else {
            0.0
        },
        max_attempts: attempts.iter().copied().max().unwrap_or(0),
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
