//! Word Search - CLI
//!
//! Word search puzzle game with TUI and CLI modes, plus board generation
//! and placement benchmarking.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use word_search::{
    commands::{GenerateConfig, generate_puzzle, run_benchmark, run_simple},
    core::{BoardConfig, Difficulty},
    engine::PlacementConfig,
    logging::init_logger,
    output::{print_benchmark_result, print_generate_result},
    wordlists::{WordCatalog, loader::load_catalog},
};

#[derive(Parser)]
#[command(
    name = "word_search",
    about = "Word search puzzle generator and player",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (default, 15x15 / 4 words), medium (20x20 / 8), hard (25x25 / 12)
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: String,

    /// Seed for reproducible puzzles (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'builtin' (default, 37 words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Generate and print a single puzzle
    Generate {
        /// Override the board side length
        #[arg(long)]
        size: Option<usize>,

        /// Override the number of hidden words
        #[arg(long)]
        words: Option<usize>,

        /// Highlight the hidden words and list their positions
        #[arg(long)]
        solution: bool,
    },

    /// Measure placement effort over many generated boards
    Benchmark {
        /// Number of boards to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Override the board side length
        #[arg(long)]
        size: Option<usize>,

        /// Override the number of hidden words
        #[arg(long)]
        words: Option<usize>,

        /// Random draws allowed per word before a board fails
        #[arg(long, default_value = "10000")]
        max_attempts: usize,
    },
}

/// Apply --size / --words overrides on top of the difficulty tier
fn board_config(difficulty: Difficulty, size: Option<usize>, words: Option<usize>) -> BoardConfig {
    let base = difficulty.config();
    BoardConfig::new(
        size.unwrap_or(base.grid_size),
        words.unwrap_or(base.word_count),
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let difficulty: Difficulty = cli.difficulty.parse()?;
    let catalog = load_catalog(&cli.wordlist)?;

    // Draw a seed up front so every run can be reproduced
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("Using seed {seed}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(catalog, difficulty, seed),
        Commands::Simple => run_simple_command(&catalog, difficulty, seed),
        Commands::Generate {
            size,
            words,
            solution,
        } => run_generate_command(
            &catalog,
            board_config(difficulty, size, words),
            seed,
            solution,
        ),
        Commands::Benchmark {
            count,
            size,
            words,
            max_attempts,
        } => {
            run_benchmark_command(
                &catalog,
                board_config(difficulty, size, words),
                max_attempts,
                count,
                seed,
            );
            Ok(())
        }
    }
}

fn run_generate_command(
    catalog: &WordCatalog,
    board: BoardConfig,
    seed: u64,
    solution: bool,
) -> Result<()> {
    let config = GenerateConfig::new(board, seed);
    let result = generate_puzzle(&config, catalog).context("failed to generate puzzle")?;

    print_generate_result(&result, solution);
    Ok(())
}

fn run_benchmark_command(
    catalog: &WordCatalog,
    board: BoardConfig,
    max_attempts: usize,
    count: usize,
    seed: u64,
) {
    println!(
        "Generating {count} boards of {}x{} with {} words (seed {seed})...",
        board.grid_size, board.grid_size, board.word_count
    );

    let placement = PlacementConfig {
        max_attempts,
        ..PlacementConfig::default()
    };
    let result = run_benchmark(catalog, board, placement, count, seed, true);
    print_benchmark_result(&result);
}

fn run_simple_command(catalog: &WordCatalog, difficulty: Difficulty, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    run_simple(catalog, difficulty, &mut rng).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(catalog: WordCatalog, difficulty: Difficulty, seed: u64) -> Result<()> {
    use word_search::interactive::{App, run_tui};

    let app = App::new(catalog, difficulty, StdRng::seed_from_u64(seed))
        .context("failed to generate puzzle")?;
    run_tui(app)
}
