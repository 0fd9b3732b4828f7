//! The Major System cipher: digit-to-consonant mapping and word encoding.
//!
//! This module implements the phonetic substitution cipher at the heart of
//! the library:
//!
//! - [`CipherTable`] - immutable mapping from each decimal digit to the
//!   consonant graphemes that encode it
//! - [`encode`] - derive a word's consonant skeleton and digit sequence
//!
//! # The cipher
//!
//! The built-in table ([`CipherTable::major()`]) follows the classical Major
//! System assignments:
//!
//! ```text
//! 0: z s c    1: d t    2: n      3: m       4: r
//! 5: l        6: j sh ch g        7: k q qu  8: f v th  9: b p
//! ```
//!
//! A grapheme is a one- or two-character consonant cluster treated as a
//! single cipher unit. Graphemes are disjoint across digits: no grapheme
//! encodes two digits, and [`CipherTable::new`] rejects tables that violate
//! this.
//!
//! # Encoding
//!
//! Encoding strips the vowels a, e, i, o, u from a word to obtain its
//! skeleton, then scans the skeleton left to right. At each position a
//! two-character grapheme of the table ("sh", "ch", "th", "qu" in the
//! built-in table) is consumed in preference to a single character. Every
//! grapheme must be covered by the table; a single unmapped grapheme makes
//! the whole encoding undefined.
//!
//! ```rust,ignore
//! use libmajor::cipher::{encode, CipherTable};
//!
//! let table = CipherTable::major();
//! let enc = encode(&table, "ten");
//! assert_eq!(enc.skeleton, "tn");
//! assert_eq!(enc.digits.as_deref(), Some("12"));
//! ```

mod encoder;
mod table;

pub use encoder::{encode, strip_vowels, Encoding, VOWELS};
pub use table::{CipherError, CipherTable};
