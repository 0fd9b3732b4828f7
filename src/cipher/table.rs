//! Cipher table construction and grapheme lookup.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised while constructing a [`CipherTable`].
///
/// These are construction-time errors only; a built table is immutable and
/// every lookup on it is infallible (returning `Option` for missing
/// graphemes).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A digit outside the decimal range 0-9 was assigned graphemes.
    #[error("digit {0} is outside the decimal range 0-9")]
    InvalidDigit(u8),

    /// A grapheme was empty, longer than two characters, or not lowercase
    /// ASCII letters.
    #[error("grapheme {0:?} must be 1-2 lowercase ASCII letters")]
    InvalidGrapheme(String),

    /// The same grapheme was assigned to two different digits.
    ///
    /// Disjointness across digits is what makes a word's digit sequence a
    /// pure function of the word and the table.
    #[error("grapheme {grapheme:?} is assigned to both digit {first} and digit {second}")]
    DuplicateGrapheme {
        /// The offending grapheme
        grapheme: String,
        /// Digit the grapheme was first assigned to
        first: u8,
        /// Digit the grapheme was assigned to again
        second: u8,
    },
}

/// Immutable mapping from decimal digits to the consonant graphemes that
/// encode them.
///
/// # Invariants
///
/// - Every grapheme is 1-2 lowercase ASCII letters.
/// - Graphemes are disjoint across digits.
///
/// Both are enforced by [`CipherTable::new`]; the built-in
/// [`CipherTable::major()`] table satisfies them by construction.
///
/// # Example
///
/// ```rust,ignore
/// use libmajor::cipher::CipherTable;
///
/// let table = CipherTable::major();
/// assert_eq!(table.digit("t"), Some(1));
/// assert_eq!(table.digit("sh"), Some(6));
/// assert_eq!(table.digit("w"), None);
/// ```
#[derive(Debug, Clone)]
pub struct CipherTable {
    /// Grapheme -> digit lookup
    digit_of: FxHashMap<String, u8>,
    /// Two-character graphemes, consumed greedily during encoding
    digraphs: Vec<String>,
}

impl CipherTable {
    /// Build a table from `(digit, graphemes)` assignments.
    ///
    /// # Arguments
    ///
    /// * `assignments` - pairs of a decimal digit and the graphemes that
    ///   encode it
    ///
    /// # Errors
    ///
    /// Returns [`CipherError`] if a digit is outside 0-9, a grapheme is
    /// malformed, or a grapheme is assigned to more than one digit.
    pub fn new<'a, I>(assignments: I) -> Result<Self, CipherError>
    where
        I: IntoIterator<Item = (u8, &'a [&'a str])>,
    {
        let mut digit_of = FxHashMap::default();
        let mut digraphs = Vec::new();

        for (digit, graphemes) in assignments {
            if digit > 9 {
                return Err(CipherError::InvalidDigit(digit));
            }

            for &grapheme in graphemes {
                if grapheme.is_empty()
                    || grapheme.len() > 2
                    || !grapheme.bytes().all(|b| b.is_ascii_lowercase())
                {
                    return Err(CipherError::InvalidGrapheme(grapheme.to_string()));
                }

                if let Some(&first) = digit_of.get(grapheme) {
                    return Err(CipherError::DuplicateGrapheme {
                        grapheme: grapheme.to_string(),
                        first,
                        second: digit,
                    });
                }

                if grapheme.len() == 2 {
                    digraphs.push(grapheme.to_string());
                }
                digit_of.insert(grapheme.to_string(), digit);
            }
        }

        Ok(Self { digit_of, digraphs })
    }

    /// The built-in Major System table.
    ///
    /// ```text
    /// 0: z s c    1: d t    2: n      3: m       4: r
    /// 5: l        6: j sh ch g        7: k q qu  8: f v th  9: b p
    /// ```
    ///
    /// "c" encodes 0 (soft c) and "g" encodes 6 (soft g); their hard
    /// variants are covered by "k" and the digraph-free "g" assignment
    /// respectively, keeping the table disjoint.
    pub fn major() -> Self {
        const MAJOR: &[(u8, &[&str])] = &[
            (0, &["z", "s", "c"]),
            (1, &["d", "t"]),
            (2, &["n"]),
            (3, &["m"]),
            (4, &["r"]),
            (5, &["l"]),
            (6, &["j", "sh", "ch", "g"]),
            (7, &["k", "q", "qu"]),
            (8, &["f", "v", "th"]),
            (9, &["b", "p"]),
        ];

        Self::new(MAJOR.iter().copied()).expect("built-in table is well-formed")
    }

    /// Look up the digit encoded by a grapheme.
    ///
    /// Returns `None` for graphemes the table does not cover.
    #[inline]
    pub fn digit(&self, grapheme: &str) -> Option<u8> {
        self.digit_of.get(grapheme).copied()
    }

    /// Check whether a two-character string is a digraph of this table.
    #[inline]
    pub fn is_digraph(&self, pair: &str) -> bool {
        self.digraphs.iter().any(|d| d == pair)
    }

    /// Number of graphemes in the table.
    #[inline]
    pub fn grapheme_count(&self) -> usize {
        self.digit_of.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_table_lookups() {
        let table = CipherTable::major();
        assert_eq!(table.digit("z"), Some(0));
        assert_eq!(table.digit("c"), Some(0));
        assert_eq!(table.digit("t"), Some(1));
        assert_eq!(table.digit("n"), Some(2));
        assert_eq!(table.digit("g"), Some(6));
        assert_eq!(table.digit("sh"), Some(6));
        assert_eq!(table.digit("qu"), Some(7));
        assert_eq!(table.digit("th"), Some(8));
        assert_eq!(table.digit("p"), Some(9));
    }

    #[test]
    fn test_unmapped_graphemes() {
        let table = CipherTable::major();
        assert_eq!(table.digit("w"), None);
        assert_eq!(table.digit("x"), None);
        assert_eq!(table.digit("h"), None);
    }

    #[test]
    fn test_digraphs() {
        let table = CipherTable::major();
        assert!(table.is_digraph("sh"));
        assert!(table.is_digraph("ch"));
        assert!(table.is_digraph("th"));
        assert!(table.is_digraph("qu"));
        assert!(!table.is_digraph("ph"));
    }

    #[test]
    fn test_grapheme_count() {
        // 3 + 2 + 1 + 1 + 1 + 1 + 4 + 3 + 3 + 2
        assert_eq!(CipherTable::major().grapheme_count(), 21);
    }

    #[test]
    fn test_rejects_duplicate_grapheme() {
        let result = CipherTable::new([(0u8, &["s", "c"][..]), (7, &["k", "c"][..])]);
        assert_eq!(
            result.unwrap_err(),
            CipherError::DuplicateGrapheme {
                grapheme: "c".to_string(),
                first: 0,
                second: 7,
            }
        );
    }

    #[test]
    fn test_rejects_invalid_digit() {
        let result = CipherTable::new([(10u8, &["x"][..])]);
        assert_eq!(result.unwrap_err(), CipherError::InvalidDigit(10));
    }

    #[test]
    fn test_rejects_malformed_grapheme() {
        assert!(matches!(
            CipherTable::new([(1u8, &[""][..])]),
            Err(CipherError::InvalidGrapheme(_))
        ));
        assert!(matches!(
            CipherTable::new([(1u8, &["sch"][..])]),
            Err(CipherError::InvalidGrapheme(_))
        ));
        assert!(matches!(
            CipherTable::new([(1u8, &["S"][..])]),
            Err(CipherError::InvalidGrapheme(_))
        ));
    }
}
