//! Grammatical roles and the word classification seam.
//!
//! Role-aware phrase search needs to know whether a word is an adjective, a
//! noun, or a verb. Classification is an external concern: this module
//! defines the [`RoleClassifier`] trait the index consumes, and one concrete
//! implementation backed by a tagged lexicon file. Anything that can answer
//! "what role is this word" can plug in, including a plain closure.
//!
//! # Lexicon file format
//!
//! One word and tag per line, whitespace-separated; `#` starts a comment:
//!
//! ```text
//! # word  tag
//! big     adj
//! dog     noun
//! run     verb
//! ```
//!
//! Accepted tags are `adj`/`adjective`, `noun`, and `verb`
//! (case-insensitive).
//!
//! # Example
//!
//! ```rust,ignore
//! use libmajor::lexicon::{LexiconClassifier, RoleClassifier, WordRole};
//!
//! let lexicon = LexiconClassifier::load("lexicon.txt")?;
//! assert_eq!(lexicon.classify("dog"), WordRole::Noun);
//! assert_eq!(lexicon.classify("zyzzyva"), WordRole::Unknown);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The grammatical role of a word in a phrase template.
///
/// `Unknown` is a first-class variant rather than an `Option` wrapper so
/// that every consumer matches it exhaustively. The index treats `Unknown`
/// identically regardless of why classification failed (word missing from
/// the lexicon, ambiguous entry, classifier error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordRole {
    /// An adjective ("big")
    Adjective,
    /// A noun ("dog")
    Noun,
    /// A verb ("run")
    Verb,
    /// Role could not be determined
    Unknown,
}

impl WordRole {
    /// Returns true unless the role is [`WordRole::Unknown`].
    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, WordRole::Unknown)
    }

    /// Parse a lexicon tag.
    ///
    /// Returns `None` for unrecognized tags; `Unknown` is never spelled in
    /// a lexicon file.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "adj" | "adjective" => Some(WordRole::Adjective),
            "noun" => Some(WordRole::Noun),
            "verb" => Some(WordRole::Verb),
            _ => None,
        }
    }
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordRole::Adjective => write!(f, "adjective"),
            WordRole::Noun => write!(f, "noun"),
            WordRole::Verb => write!(f, "verb"),
            WordRole::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classifies a word into a grammatical role.
///
/// The trait seam keeps the index independent of where classification comes
/// from: a lexicon file, a part-of-speech tagger, or a test closure.
pub trait RoleClassifier {
    /// Classify one word. Return [`WordRole::Unknown`] when no role can be
    /// determined, whatever the reason.
    fn classify(&self, word: &str) -> WordRole;
}

/// Adapter implementing [`RoleClassifier`] for a plain function or closure.
///
/// ```rust,ignore
/// use libmajor::lexicon::{FnClassifier, WordRole};
///
/// let classifier = FnClassifier(|word: &str| match word {
///     "big" => WordRole::Adjective,
///     _ => WordRole::Unknown,
/// });
/// ```
pub struct FnClassifier<F>(pub F);

impl<F> RoleClassifier for FnClassifier<F>
where
    F: Fn(&str) -> WordRole,
{
    fn classify(&self, word: &str) -> WordRole {
        (self.0)(word)
    }
}

/// Errors raised while loading a lexicon file.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// I/O error reading the file
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// A line did not have the `word tag` shape
    #[error("line {line}: expected \"word tag\", got {text:?}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line
        text: String,
    },

    /// A tag was not one of adj/adjective/noun/verb
    #[error("line {line}: unrecognized tag {tag:?}")]
    UnknownTag {
        /// 1-based line number
        line: usize,
        /// The offending tag
        tag: String,
    },
}

/// A classifier backed by a tagged word list loaded into memory.
///
/// Words are stored lowercased; lookups are exact.
#[derive(Debug, Clone, Default)]
pub struct LexiconClassifier {
    roles: FxHashMap<String, WordRole>,
}

impl LexiconClassifier {
    /// Load a lexicon from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if the file cannot be read or a line cannot
    /// be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        Self::from_reader(File::open(path)?)
    }

    /// Load a lexicon from any reader.
    ///
    /// See the [module docs](self) for the line format.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut roles = FxHashMap::default();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let text = line.split('#').next().unwrap_or("").trim();
            if text.is_empty() {
                continue;
            }

            let mut fields = text.split_whitespace();
            let (word, tag) = match (fields.next(), fields.next()) {
                (Some(word), Some(tag)) => (word, tag),
                _ => {
                    return Err(LexiconError::MalformedLine {
                        line: line_no,
                        text: text.to_string(),
                    })
                }
            };

            let role = WordRole::from_tag(tag).ok_or_else(|| LexiconError::UnknownTag {
                line: line_no,
                tag: tag.to_string(),
            })?;
            roles.insert(word.to_ascii_lowercase(), role);
        }

        Ok(Self { roles })
    }

    /// Number of words in the lexicon.
    #[inline]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check if the lexicon is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl RoleClassifier for LexiconClassifier {
    fn classify(&self, word: &str) -> WordRole {
        self.roles.get(word).copied().unwrap_or(WordRole::Unknown)
    }
}
