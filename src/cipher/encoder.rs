//! Word encoding: vowel stripping and grapheme-to-digit mapping.

use super::table::CipherTable;

/// The vowel characters removed when deriving a word's skeleton.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// The result of encoding one word.
///
/// `digits` is `None` when any grapheme of the skeleton is not covered by
/// the cipher table. There is no partial or best-effort code: a word either
/// encodes completely or not at all, and an undefined encoding is the
/// caller's signal to drop the word from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// The word with all vowels removed
    pub skeleton: String,
    /// The digit sequence, one digit per grapheme consumed from the skeleton
    pub digits: Option<String>,
}

/// Remove the vowels a, e, i, o, u from a word.
#[inline]
pub fn strip_vowels(word: &str) -> String {
    word.chars().filter(|c| !VOWELS.contains(c)).collect()
}

/// Encode a word as its consonant skeleton and digit sequence.
///
/// The skeleton is scanned left to right. At each position, a two-character
/// grapheme of the table is consumed in preference to a single character
/// (maximal munch), so "shine" encodes "sh" + "n" rather than "s" + "h" + "n".
///
/// Callers are expected to pass non-empty lowercase alphabetic words; the
/// [`corpus`](crate::corpus) loaders normalize raw word lists to this form.
///
/// # Example
///
/// ```rust,ignore
/// use libmajor::cipher::{encode, CipherTable};
///
/// let table = CipherTable::major();
/// assert_eq!(encode(&table, "ten").digits.as_deref(), Some("12"));
/// assert_eq!(encode(&table, "shine").digits.as_deref(), Some("62"));
/// // "h" alone is not in the table, so "hat" has no encoding
/// assert_eq!(encode(&table, "hat").digits, None);
/// ```
pub fn encode(table: &CipherTable, word: &str) -> Encoding {
    let skeleton = strip_vowels(word);
    let digits = map_skeleton(table, &skeleton);
    Encoding { skeleton, digits }
}

/// Map a skeleton to digits, or `None` if any grapheme is unmapped.
fn map_skeleton(table: &CipherTable, skeleton: &str) -> Option<String> {
    let mut digits = String::new();
    let mut rest = skeleton;

    while !rest.is_empty() {
        let grapheme = match rest.get(..2) {
            Some(pair) if table.is_digraph(pair) => pair,
            _ => rest.get(..1)?,
        };
        digits.push(char::from(b'0' + table.digit(grapheme)?));
        rest = &rest[grapheme.len()..];
    }

    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CipherTable {
        CipherTable::major()
    }

    #[test]
    fn test_strip_vowels() {
        assert_eq!(strip_vowels("ten"), "tn");
        assert_eq!(strip_vowels("audio"), "d");
        assert_eq!(strip_vowels("rhythm"), "rhythm");
        assert_eq!(strip_vowels("aeiou"), "");
    }

    #[test]
    fn test_encode_simple_words() {
        assert_eq!(encode(&table(), "ten").digits.as_deref(), Some("12"));
        assert_eq!(encode(&table(), "moon").digits.as_deref(), Some("32"));
        assert_eq!(encode(&table(), "cat").digits.as_deref(), Some("01"));
        assert_eq!(encode(&table(), "dog").digits.as_deref(), Some("16"));
    }

    #[test]
    fn test_encode_consumes_digraphs() {
        // "sh" is one grapheme, not "s" + "h" ("h" alone is unmapped)
        let enc = encode(&table(), "shine");
        assert_eq!(enc.skeleton, "shn");
        assert_eq!(enc.digits.as_deref(), Some("62"));

        let enc = encode(&table(), "the");
        assert_eq!(enc.skeleton, "th");
        assert_eq!(enc.digits.as_deref(), Some("8"));
    }

    #[test]
    fn test_digit_count_matches_graphemes_not_chars() {
        // skeleton "chrch" is 5 chars but 3 graphemes: ch r ch
        let enc = encode(&table(), "church");
        assert_eq!(enc.skeleton, "chrch");
        assert_eq!(enc.digits.as_deref(), Some("646"));
    }

    #[test]
    fn test_unmapped_grapheme_voids_whole_encoding() {
        // "w" has no digit; no partial code is emitted
        let enc = encode(&table(), "window");
        assert_eq!(enc.skeleton, "wndw");
        assert_eq!(enc.digits, None);

        // bare "h" (outside a digraph) is unmapped
        assert_eq!(encode(&table(), "hat").digits, None);
        assert_eq!(encode(&table(), "box").digits, None);
    }

    #[test]
    fn test_qu_never_survives_vowel_stripping() {
        // the "u" of "qu" is a vowel, so the digraph can't appear in a
        // skeleton; "q" maps on its own
        let enc = encode(&table(), "queen");
        assert_eq!(enc.skeleton, "qn");
        assert_eq!(enc.digits.as_deref(), Some("72"));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        for word in ["ten", "shine", "church", "window", "queen"] {
            assert_eq!(encode(&table(), word), encode(&table(), word));
        }
    }

    #[test]
    fn test_digits_are_all_decimal() {
        for word in ["ten", "moon", "shine", "church", "jasmine"] {
            if let Some(digits) = encode(&table(), word).digits {
                assert!(digits.bytes().all(|b| b.is_ascii_digit()), "{}", word);
            }
        }
    }

    #[test]
    fn test_all_vowel_word_has_empty_code() {
        let enc = encode(&table(), "eau");
        assert_eq!(enc.skeleton, "");
        assert_eq!(enc.digits.as_deref(), Some(""));
    }
}
