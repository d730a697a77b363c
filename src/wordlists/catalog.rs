//! Word catalog
//!
//! A validated, duplicate-free list of candidate words that puzzles draw
//! their hidden words from.

use super::WORD_LIBRARY;
use crate::core::PuzzleError;
use rand::Rng;
use rand::seq::index;
use rustc_hash::FxHashSet;

/// Fixed list of uppercase candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    words: Vec<String>,
}

impl WordCatalog {
    /// Build a catalog from arbitrary words
    ///
    /// Words are trimmed and uppercased before validation.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidWord` for an empty word or one containing
    /// anything other than ASCII letters, and `PuzzleError::DuplicateWord` if
    /// a word appears twice.
    pub fn new<I, S>(words: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut list = Vec::new();

        for word in words {
            let word = word.as_ref().trim().to_ascii_uppercase();

            if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(PuzzleError::InvalidWord(word));
            }
            if !seen.insert(word.clone()) {
                return Err(PuzzleError::DuplicateWord(word));
            }

            list.push(word);
        }

        Ok(Self { words: list })
    }

    /// The compiled-in library
    ///
    /// # Panics
    /// Will not panic - the build script only emits uppercase words and the
    /// library is checked for duplicates by the test suite.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(WORD_LIBRARY).expect("built-in library is valid")
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Length of the longest word, 0 for an empty catalog
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }

    /// Draw `count` distinct words uniformly at random, without replacement
    ///
    /// # Errors
    /// Returns `PuzzleError::NotEnoughWords` if `count` exceeds the catalog size.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_search::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::builtin();
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let words = catalog.sample(4, &mut rng).unwrap();
    /// assert_eq!(words.len(), 4);
    /// assert!(words.iter().all(|w| catalog.contains(w)));
    /// ```
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, PuzzleError> {
        if count > self.words.len() {
            return Err(PuzzleError::NotEnoughWords {
                requested: count,
                available: self.words.len(),
            });
        }

        Ok(index::sample(rng, self.words.len(), count)
            .into_iter()
            .map(|i| self.words[i].clone())
            .collect())
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn builtin_has_full_library() {
        let catalog = WordCatalog::builtin();
        assert_eq!(catalog.len(), WORD_LIBRARY.len());
        assert!(catalog.contains("VULNERABILITY"));
        assert_eq!(catalog.longest(), 13);
    }

    #[test]
    fn new_normalizes_case() {
        let catalog = WordCatalog::new(["java", " Linux "]).unwrap();
        assert_eq!(catalog.words(), &["JAVA".to_string(), "LINUX".to_string()]);
    }

    #[test]
    fn new_rejects_invalid_words() {
        assert_eq!(
            WordCatalog::new(["JAVA", "C++"]),
            Err(PuzzleError::InvalidWord("C++".to_string()))
        );
        assert_eq!(
            WordCatalog::new(["JAVA", "  "]),
            Err(PuzzleError::InvalidWord(String::new()))
        );
        assert!(WordCatalog::new(["two words"]).is_err());
    }

    #[test]
    fn new_rejects_duplicates() {
        assert_eq!(
            WordCatalog::new(["DATA", "data"]),
            Err(PuzzleError::DuplicateWord("DATA".to_string()))
        );
    }

    #[test]
    fn sample_is_distinct_and_from_catalog() {
        let catalog = WordCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);

        for count in [0, 4, 8, 12, catalog.len()] {
            let words = catalog.sample(count, &mut rng).unwrap();
            assert_eq!(words.len(), count);

            let unique: FxHashSet<&String> = words.iter().collect();
            assert_eq!(unique.len(), count);
            assert!(words.iter().all(|w| catalog.contains(w)));
        }
    }

    #[test]
    fn sample_too_many() {
        let catalog = WordCatalog::new(["UTAS", "JAVA"]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            catalog.sample(3, &mut rng),
            Err(PuzzleError::NotEnoughWords {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn sample_is_deterministic_for_seed() {
        let catalog = WordCatalog::builtin();
        let first = catalog.sample(8, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = catalog.sample(8, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }
}
