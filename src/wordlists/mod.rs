//! Word lists for puzzle generation
//!
//! Provides the embedded word library compiled into the binary and the
//! catalog that samples hidden words from it.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::WordCatalog;
pub use embedded::{WORD_LIBRARY, WORD_LIBRARY_COUNT};
