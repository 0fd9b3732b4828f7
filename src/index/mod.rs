//! The word index: encoded words keyed by digit sequence.
//!
//! The index is the bridge between the cipher and the phrase search. It is
//! built once from a word list, dropping every word the cipher cannot fully
//! encode (and, in role-aware builds, every word of unknown role), and is
//! immutable afterwards. Because lookups perform no writes, a built index is
//! safe to query from any number of concurrent readers.
//!
//! Multiple words routinely share a digit sequence ("ten" and "dune" are
//! both "12"); the index keeps them all and leaves tie-breaking to the
//! search layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use libmajor::cipher::CipherTable;
//! use libmajor::index::WordIndex;
//!
//! let table = CipherTable::major();
//! let index = WordIndex::build(&table, ["ten", "dune", "moon"].map(String::from));
//!
//! assert_eq!(index.len(), 3);
//! let hits = index.lookup("12", None);
//! assert!(hits.contains(&"ten") && hits.contains(&"dune"));
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cipher::{encode, CipherTable};
use crate::lexicon::{LexiconClassifier, RoleClassifier, WordRole};

/// One fully-encoded word of the index.
///
/// Computed once at build time and never mutated. A word reaches the index
/// only if every grapheme of its skeleton is covered by the cipher table,
/// so `digits` is always defined and non-empty here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedWord {
    /// The original word
    pub word: String,
    /// The word with vowels removed
    pub skeleton: String,
    /// The digit sequence of the skeleton
    pub digits: String,
    /// Grammatical role; `Unknown` in role-agnostic builds
    pub role: WordRole,
}

/// Word-length distributions of an index, for diagnostics and plotting.
///
/// Keys are lengths, values are word counts; `BTreeMap` keeps the buckets
/// in ascending length order for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthHistogram {
    /// Distribution of original word lengths
    pub word_lengths: BTreeMap<usize, usize>,
    /// Distribution of skeleton lengths
    pub skeleton_lengths: BTreeMap<usize, usize>,
}

/// An immutable index from digit sequences to the words that encode them.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    entries: Vec<EncodedWord>,
    /// digit sequence -> indices into `entries`
    by_digits: FxHashMap<String, Vec<usize>>,
    classified: bool,
}

impl WordIndex {
    /// Build a role-agnostic index.
    ///
    /// Every word with a fully-defined, non-empty digit sequence is kept
    /// with role [`WordRole::Unknown`]. Duplicate words in the input become
    /// duplicate entries; the index does not deduplicate.
    pub fn build<I>(table: &CipherTable, words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::build_inner::<I, LexiconClassifier>(table, words, None)
    }

    /// Build a role-aware index.
    ///
    /// In addition to the encoding filter, words the classifier reports as
    /// [`WordRole::Unknown`] are dropped.
    pub fn build_classified<I, C>(table: &CipherTable, words: I, classifier: &C) -> Self
    where
        I: IntoIterator<Item = String>,
        C: RoleClassifier + ?Sized,
    {
        Self::build_inner(table, words, Some(classifier))
    }

    fn build_inner<I, C>(table: &CipherTable, words: I, classifier: Option<&C>) -> Self
    where
        I: IntoIterator<Item = String>,
        C: RoleClassifier + ?Sized,
    {
        let mut entries = Vec::new();
        let mut total = 0usize;
        let mut dropped_encoding = 0usize;
        let mut dropped_role = 0usize;

        for word in words {
            total += 1;

            let encoding = encode(table, &word);
            let digits = match encoding.digits {
                Some(digits) if !digits.is_empty() => digits,
                _ => {
                    dropped_encoding += 1;
                    continue;
                }
            };

            let role = match classifier {
                Some(classifier) => {
                    let role = classifier.classify(&word);
                    if !role.is_known() {
                        dropped_role += 1;
                        continue;
                    }
                    role
                }
                None => WordRole::Unknown,
            };

            entries.push(EncodedWord {
                word,
                skeleton: encoding.skeleton,
                digits,
                role,
            });
        }

        let index = Self::assemble(entries, classifier.is_some());
        info!(
            total,
            indexed = index.len(),
            dropped_encoding,
            dropped_role,
            classified = index.is_classified(),
            "word index built"
        );
        index
    }

    /// Rebuild an index from previously computed entries, e.g. after
    /// deserialization.
    ///
    /// The index is considered role-aware when every entry carries a known
    /// role, matching what [`build_classified`](Self::build_classified)
    /// would have produced.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = EncodedWord>,
    {
        let entries: Vec<EncodedWord> = entries.into_iter().collect();
        let classified = !entries.is_empty() && entries.iter().all(|e| e.role.is_known());
        Self::assemble(entries, classified)
    }

    fn assemble(entries: Vec<EncodedWord>, classified: bool) -> Self {
        let mut by_digits: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (idx, entry) in entries.iter().enumerate() {
            by_digits.entry(entry.digits.clone()).or_default().push(idx);
        }
        Self {
            entries,
            by_digits,
            classified,
        }
    }

    /// Every word whose digit sequence equals `digits`, optionally filtered
    /// by role.
    ///
    /// Returns an empty vec (never an error) when nothing matches.
    pub fn lookup(&self, digits: &str, role: Option<WordRole>) -> Vec<&str> {
        let Some(bucket) = self.by_digits.get(digits) else {
            return Vec::new();
        };

        bucket
            .iter()
            .map(|&idx| &self.entries[idx])
            .filter(|entry| role.map_or(true, |r| entry.role == r))
            .map(|entry| entry.word.as_str())
            .collect()
    }

    /// Number of indexed words.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the index was built role-aware.
    ///
    /// A role-aware search against a role-agnostic index cannot match
    /// anything (every entry's role is `Unknown`); callers can use this to
    /// detect the mismatch up front.
    #[inline]
    pub fn is_classified(&self) -> bool {
        self.classified
    }

    /// Iterate over the index entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &EncodedWord> {
        self.entries.iter()
    }

    /// Word-length and skeleton-length distributions.
    pub fn length_histogram(&self) -> LengthHistogram {
        let mut histogram = LengthHistogram::default();
        for entry in &self.entries {
            *histogram.word_lengths.entry(entry.word.len()).or_default() += 1;
            *histogram
                .skeleton_lengths
                .entry(entry.skeleton.len())
                .or_default() += 1;
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::FnClassifier;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_build_keeps_encodable_words() {
        let table = CipherTable::major();
        // "window" ("w") and "hat" ("h") cannot encode
        let index = WordIndex::build(&table, words(&["ten", "window", "moon", "hat"]));

        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("12", None), vec!["ten"]);
        assert_eq!(index.lookup("32", None), vec!["moon"]);
    }

    #[test]
    fn test_unencodable_word_never_appears() {
        let table = CipherTable::major();
        let index = WordIndex::build(&table, words(&["window"]));

        assert!(index.is_empty());
        assert!(index.lookup("", None).is_empty());
        for digits in ["2", "21", "212"] {
            assert!(index.lookup(digits, None).is_empty());
        }
    }

    #[test]
    fn test_all_vowel_word_is_dropped() {
        let table = CipherTable::major();
        let index = WordIndex::build(&table, words(&["eau", "ten"]));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_shared_digit_sequences() {
        let table = CipherTable::major();
        let index = WordIndex::build(&table, words(&["ten", "dune", "tin"]));

        let hits = index.lookup("12", None);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let table = CipherTable::major();
        let index = WordIndex::build(&table, words(&["ten", "ten"]));
        assert_eq!(index.lookup("12", None), vec!["ten", "ten"]);
    }

    #[test]
    fn test_classified_build_drops_unknown_roles() {
        let table = CipherTable::major();
        let classify = FnClassifier(|word: &str| match word {
            "big" => WordRole::Adjective,
            "dog" => WordRole::Noun,
            _ => WordRole::Unknown,
        });
        let index = WordIndex::build_classified(&table, words(&["big", "dog", "ten"]), &classify);

        assert_eq!(index.len(), 2);
        assert!(index.is_classified());
        assert_eq!(index.lookup("96", Some(WordRole::Adjective)), vec!["big"]);
        assert_eq!(index.lookup("16", Some(WordRole::Noun)), vec!["dog"]);
        assert!(index.lookup("16", Some(WordRole::Verb)).is_empty());
        assert!(index.lookup("12", None).is_empty());
    }

    #[test]
    fn test_role_filter_on_shared_digits() {
        let table = CipherTable::major();
        let classify = FnClassifier(|word: &str| match word {
            "ten" => WordRole::Noun,
            "dune" => WordRole::Adjective,
            _ => WordRole::Unknown,
        });
        let index = WordIndex::build_classified(&table, words(&["ten", "dune"]), &classify);

        assert_eq!(index.lookup("12", Some(WordRole::Noun)), vec!["ten"]);
        assert_eq!(index.lookup("12", Some(WordRole::Adjective)), vec!["dune"]);
        assert_eq!(index.lookup("12", None).len(), 2);
    }

    #[test]
    fn test_build_is_idempotent() {
        let table = CipherTable::major();
        let input = words(&["ten", "moon", "window", "dune"]);

        let a = WordIndex::build(&table, input.clone());
        let b = WordIndex::build(&table, input);

        let mut entries_a: Vec<_> = a.entries().cloned().collect();
        let mut entries_b: Vec<_> = b.entries().cloned().collect();
        entries_a.sort_by(|x, y| x.word.cmp(&y.word));
        entries_b.sort_by(|x, y| x.word.cmp(&y.word));
        assert_eq!(entries_a, entries_b);
    }

    #[test]
    fn test_from_entries_round_trip() {
        let table = CipherTable::major();
        let index = WordIndex::build(&table, words(&["ten", "moon"]));

        let rebuilt = WordIndex::from_entries(index.entries().cloned());
        assert_eq!(rebuilt.len(), index.len());
        assert_eq!(rebuilt.lookup("12", None), index.lookup("12", None));
        assert!(!rebuilt.is_classified());
    }

    #[test]
    fn test_length_histogram() {
        let table = CipherTable::major();
        let index = WordIndex::build(&table, words(&["ten", "tin", "moon"]));

        let histogram = index.length_histogram();
        assert_eq!(histogram.word_lengths.get(&3), Some(&2));
        assert_eq!(histogram.word_lengths.get(&4), Some(&1));
        // "tn", "tn", "mn"
        assert_eq!(histogram.skeleton_lengths.get(&2), Some(&3));
    }
}
