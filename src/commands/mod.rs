//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GenerateConfig, GenerateResult, generate_puzzle};
pub use simple::run_simple;
