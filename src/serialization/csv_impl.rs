//! CSV serialization for word indexes.
//!
//! One row per index entry:
//!
//! ```text
//! word,skeleton,digits,word_len,skeleton_len,role
//! ten,tn,12,3,2,noun
//! ```
//!
//! The length columns are derived data, included for spreadsheet and
//! plotting workflows; they are ignored when reading an index back.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use super::{IndexSerializer, SerializationError};
use crate::index::{EncodedWord, WordIndex};
use crate::lexicon::WordRole;

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    word: String,
    skeleton: String,
    digits: String,
    word_len: usize,
    skeleton_len: usize,
    role: WordRole,
}

impl From<&EncodedWord> for CsvRow {
    fn from(entry: &EncodedWord) -> Self {
        Self {
            word: entry.word.clone(),
            skeleton: entry.skeleton.clone(),
            digits: entry.digits.clone(),
            word_len: entry.word.len(),
            skeleton_len: entry.skeleton.len(),
            role: entry.role,
        }
    }
}

impl From<CsvRow> for EncodedWord {
    fn from(row: CsvRow) -> Self {
        Self {
            word: row.word,
            skeleton: row.skeleton,
            digits: row.digits,
            role: row.role,
        }
    }
}

/// CSV serializer for word indexes.
pub struct CsvSerializer;

impl IndexSerializer for CsvSerializer {
    fn serialize<W: Write>(index: &WordIndex, writer: W) -> Result<(), SerializationError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for entry in index.entries() {
            csv_writer.serialize(CsvRow::from(entry))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<WordIndex, SerializationError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut entries = Vec::new();
        for row in csv_reader.deserialize::<CsvRow>() {
            entries.push(EncodedWord::from(row?));
        }
        Ok(WordIndex::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::CipherTable;
    use crate::lexicon::FnClassifier;

    #[test]
    fn test_csv_round_trip() {
        let table = CipherTable::major();
        let classify = FnClassifier(|word: &str| match word {
            "ten" => WordRole::Noun,
            "dune" => WordRole::Adjective,
            _ => WordRole::Unknown,
        });
        let index =
            WordIndex::build_classified(&table, ["ten", "dune"].map(String::from), &classify);

        let mut buffer = Vec::new();
        CsvSerializer::serialize(&index, &mut buffer).unwrap();
        let loaded = CsvSerializer::deserialize(buffer.as_slice()).unwrap();

        assert_eq!(loaded.len(), index.len());
        assert!(loaded.is_classified());
        assert_eq!(
            loaded.lookup("12", Some(WordRole::Noun)),
            index.lookup("12", Some(WordRole::Noun))
        );
    }

    #[test]
    fn test_csv_has_header_and_lengths() {
        let table = CipherTable::major();
        let index = WordIndex::build(&table, vec!["ten".to_string()]);

        let mut buffer = Vec::new();
        CsvSerializer::serialize(&index, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("word,skeleton,digits,word_len,skeleton_len,role"));
        assert!(text.contains("ten,tn,12,3,2,unknown"));
    }
}
