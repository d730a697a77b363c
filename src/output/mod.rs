//! Terminal output formatting
//!
//! Display utilities for boards, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_board, print_generate_result};
