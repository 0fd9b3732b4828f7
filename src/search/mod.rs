//! Phrase search: partitioning a number into indexed words.
//!
//! Given a target number, the searcher enumerates the ways to split the
//! digit string into one, two, or three contiguous non-empty pieces and
//! returns a phrase assembled from words whose digit sequences match the
//! pieces. Fewer words are strictly preferred: all one-word matches are
//! tried before any two-word split, and so on.
//!
//! In role-aware mode the pieces must additionally satisfy the phrase
//! template (noun for one word, adjective + noun for two, adjective +
//! noun + verb for three), so the result reads as a grammatical fragment
//! ("the big dog run") rather than an arbitrary word run.
//!
//! # Ordering and randomness
//!
//! Split points are tried in ascending order (for three words, the outer
//! split ascending and the inner split ascending within it) and the first
//! fully-matched partition wins; no later split is considered. Within one
//! piece, ties between words sharing a digit sequence are broken uniformly
//! at random, so repeated searches for the same number may produce
//! different words. [`PhraseSearcher::search_with`] takes a caller-supplied
//! [`Rng`] for reproducible selection.
//!
//! # Example
//!
//! ```rust,ignore
//! use libmajor::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let table = CipherTable::major();
//! let index = WordIndex::build(&table, vec!["ten".to_string()]);
//! let searcher = PhraseSearcher::new(&index, SearchConfig::default());
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! assert_eq!(searcher.search_with("12", &mut rng)?, Some("ten".to_string()));
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::index::WordIndex;
use crate::lexicon::WordRole;

/// Hard upper bound on the number of content words in a phrase.
pub const MAX_PHRASE_WORDS: usize = 3;

/// Errors visible to search callers.
///
/// A search that simply finds nothing is `Ok(None)`, not an error; the only
/// error is a malformed number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The number was empty or contained a non-digit character.
    #[error("invalid number {0:?}: must be non-empty decimal digits")]
    InvalidNumber(String),
}

/// Configuration for a [`PhraseSearcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of content words, clamped to 1..=[`MAX_PHRASE_WORDS`]
    pub max_words: usize,
    /// Constrain pieces to the adjective/noun/verb phrase template
    pub role_aware: bool,
    /// Cosmetic word prefixed to every phrase; never affects matching
    pub filler: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_PHRASE_WORDS,
            role_aware: false,
            filler: None,
        }
    }
}

/// Searches a [`WordIndex`] for phrases spelling a target number.
///
/// The searcher borrows the index immutably, so any number of searchers
/// (and concurrent calls on one searcher) may share an index.
#[derive(Debug, Clone)]
pub struct PhraseSearcher<'i> {
    index: &'i WordIndex,
    config: SearchConfig,
}

impl<'i> PhraseSearcher<'i> {
    /// Create a searcher over an index.
    pub fn new(index: &'i WordIndex, config: SearchConfig) -> Self {
        Self { index, config }
    }

    /// Search using the thread-local RNG for tie-breaking.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidNumber`] if `number` is empty or contains a
    /// non-digit character. Finding no phrase is `Ok(None)`.
    pub fn search(&self, number: &str) -> Result<Option<String>, SearchError> {
        self.search_with(number, &mut rand::thread_rng())
    }

    /// Search with a caller-supplied RNG.
    ///
    /// Passing a seeded RNG (e.g. `StdRng::seed_from_u64`) makes candidate
    /// selection reproducible.
    pub fn search_with<R: Rng>(
        &self,
        number: &str,
        rng: &mut R,
    ) -> Result<Option<String>, SearchError> {
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            error!(number, "invalid number: must be non-empty decimal digits");
            return Err(SearchError::InvalidNumber(number.to_string()));
        }

        let n = number.len();
        let max_words = self.config.max_words.clamp(1, MAX_PHRASE_WORDS);

        for word_count in 1..=max_words.min(n) {
            let found = match word_count {
                1 => self.match_one(number, rng),
                2 => self.match_two(number, rng),
                _ => self.match_three(number, rng),
            };
            if let Some(words) = found {
                let phrase = self.assemble(&words);
                debug!(number, word_count, phrase = %phrase, "phrase found");
                return Ok(Some(phrase));
            }
        }

        warn!(number, "no mnemonic phrase found");
        Ok(None)
    }

    /// One word covering the whole number; noun when role-aware.
    fn match_one<R: Rng>(&self, number: &str, rng: &mut R) -> Option<Vec<String>> {
        let word = self.pick(number, WordRole::Noun, rng)?;
        Some(vec![word])
    }

    /// First ascending split where both pieces match (adjective + noun).
    fn match_two<R: Rng>(&self, number: &str, rng: &mut R) -> Option<Vec<String>> {
        let n = number.len();
        for i in 1..n {
            let adjectives = self.matches(&number[..i], WordRole::Adjective);
            if adjectives.is_empty() {
                continue;
            }
            let nouns = self.matches(&number[i..], WordRole::Noun);
            if nouns.is_empty() {
                continue;
            }
            return Some(vec![choose(&adjectives, rng), choose(&nouns, rng)]);
        }
        None
    }

    /// First `(i, j)` pair in nested ascending order where all three pieces
    /// match (adjective + noun + verb).
    fn match_three<R: Rng>(&self, number: &str, rng: &mut R) -> Option<Vec<String>> {
        let n = number.len();
        for i in 1..n - 1 {
            let adjectives = self.matches(&number[..i], WordRole::Adjective);
            if adjectives.is_empty() {
                continue;
            }
            for j in i + 1..n {
                let nouns = self.matches(&number[i..j], WordRole::Noun);
                if nouns.is_empty() {
                    continue;
                }
                let verbs = self.matches(&number[j..], WordRole::Verb);
                if verbs.is_empty() {
                    continue;
                }
                return Some(vec![
                    choose(&adjectives, rng),
                    choose(&nouns, rng),
                    choose(&verbs, rng),
                ]);
            }
        }
        None
    }

    /// Index hits for one piece, role-filtered only in role-aware mode.
    fn matches(&self, digits: &str, role: WordRole) -> Vec<&str> {
        let filter = self.config.role_aware.then_some(role);
        self.index.lookup(digits, filter)
    }

    /// Random single match for one piece.
    fn pick<R: Rng>(&self, digits: &str, role: WordRole, rng: &mut R) -> Option<String> {
        let candidates = self.matches(digits, role);
        if candidates.is_empty() {
            None
        } else {
            Some(choose(&candidates, rng))
        }
    }

    /// Join the words, prefixing the filler when configured.
    fn assemble(&self, words: &[String]) -> String {
        let joined = words.join(" ");
        match &self.config.filler {
            Some(filler) => format!("{} {}", filler, joined),
            None => joined,
        }
    }
}

/// Uniform random choice from a non-empty candidate list.
fn choose<R: Rng>(candidates: &[&str], rng: &mut R) -> String {
    candidates
        .choose(rng)
        .expect("candidates checked non-empty")
        .to_string()
}
