//! # libmajor
//!
//! Mnemonic phrase generation for numbers using the Major System.
//!
//! The Major System is a mnemonic technique that maps each decimal digit to a
//! set of consonant sounds, so that a number can be memorized as a
//! pronounceable phrase. This library indexes a word list by the digit
//! sequence of each word's consonant skeleton and searches the index for a
//! phrase of one to three words whose concatenated digit sequences spell a
//! target number.
//!
//! ## Example
//!
//! ```rust,ignore
//! use libmajor::prelude::*;
//!
//! let table = CipherTable::major();
//! let words = vec!["ten".to_string(), "dune".to_string(), "mare".to_string()];
//! let index = WordIndex::build(&table, words);
//!
//! let searcher = PhraseSearcher::new(&index, SearchConfig::default());
//! if let Some(phrase) = searcher.search("12")? {
//!     println!("12 -> {}", phrase);
//! }
//! ```
//!
//! ## Role-aware phrases
//!
//! With a [`lexicon::RoleClassifier`], the index tags each word as an
//! adjective, noun, or verb and the search assembles grammatical
//! adjective-noun-verb phrases ("the fat moon rises") instead of arbitrary
//! word runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cipher;
pub mod corpus;
pub mod index;
pub mod lexicon;
pub mod search;

#[cfg(feature = "serialization")]
pub mod serialization;

/// CLI argument surface and command handlers
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cipher::{encode, CipherTable, Encoding};
    pub use crate::index::{EncodedWord, WordIndex};
    pub use crate::lexicon::{FnClassifier, LexiconClassifier, RoleClassifier, WordRole};
    pub use crate::search::{PhraseSearcher, SearchConfig, SearchError};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{CsvSerializer, IndexSerializer, JsonSerializer};
}
