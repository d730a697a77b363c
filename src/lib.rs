//! Word Search
//!
//! Generates word search puzzles and tracks a player's progress through them.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_search::core::Difficulty;
//! use word_search::engine::PuzzleSession;
//! use word_search::wordlists::WordCatalog;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = PuzzleSession::new(WordCatalog::builtin(), Difficulty::Easy, &mut rng).unwrap();
//!
//! // Spell the first hidden word, cell by cell
//! let word = session.remaining_word_at(0).unwrap().to_string();
//! let placement = session.grid().locate(&word).unwrap();
//! for pos in placement.positions() {
//!     session.select_cell(pos.row, pos.col).unwrap();
//! }
//! assert_eq!(session.remaining_count(), 3);
//! ```

// Core domain types
pub mod core;

// Placement, selection and session
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup for the binary
pub mod logging;
