//! Word list loading utilities
//!
//! Provides functions to build a catalog from a file or use the embedded library.

use super::WordCatalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a catalog from a file with one word per line
///
/// Blank lines are skipped; words are uppercased.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if any word is invalid or
/// repeated.
///
/// # Examples
/// ```no_run
/// use word_search::wordlists::loader::load_from_file;
///
/// let catalog = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let catalog = parse_word_list(&content)
        .with_context(|| format!("invalid word list {}", path.display()))?;

    log::info!("Loaded {} words from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Build a catalog from word-per-line text
///
/// # Errors
///
/// Returns an error if any non-blank line is not a single alphabetic word,
/// or if a word repeats.
pub fn parse_word_list(content: &str) -> Result<WordCatalog> {
    let words = content.lines().map(str::trim).filter(|line| !line.is_empty());
    Ok(WordCatalog::new(words)?)
}

/// Pick the catalog named on the command line
///
/// "builtin" selects the embedded library, anything else is treated as a path.
///
/// # Errors
///
/// Returns an error if a custom word list cannot be loaded.
pub fn load_catalog(source: &str) -> Result<WordCatalog> {
    match source {
        "builtin" | "default" => Ok(WordCatalog::builtin()),
        path => load_from_file(path),
    }
}
