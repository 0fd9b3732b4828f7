//! JSON serialization for word indexes.
//!
//! The index is written as a pretty-printed array of entries:
//!
//! ```json
//! [
//!   {
//!     "word": "ten",
//!     "skeleton": "tn",
//!     "digits": "12",
//!     "role": "noun"
//!   }
//! ]
//! ```

use std::io::{Read, Write};

use super::{IndexSerializer, SerializationError};
use crate::index::{EncodedWord, WordIndex};

/// JSON serializer for word indexes.
pub struct JsonSerializer;

impl IndexSerializer for JsonSerializer {
    fn serialize<W: Write>(index: &WordIndex, writer: W) -> Result<(), SerializationError> {
        let entries: Vec<&EncodedWord> = index.entries().collect();
        serde_json::to_writer_pretty(writer, &entries)?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<WordIndex, SerializationError> {
        let entries: Vec<EncodedWord> = serde_json::from_reader(reader)?;
        Ok(WordIndex::from_entries(entries))
    }
}
