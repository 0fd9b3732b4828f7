//! Index serialization support.
//!
//! This module provides export and import of a processed [`WordIndex`] so
//! the encoding work can be inspected, plotted, or reloaded without
//! rebuilding from a raw word list.
//!
//! Two formats are provided:
//!
//! - [`CsvSerializer`] - spreadsheet-friendly rows, including word and
//!   skeleton lengths for external plotting
//! - [`JsonSerializer`] - a pretty-printed array of entries
//!
//! # Example
//!
//! ```rust,ignore
//! use libmajor::prelude::*;
//! use std::fs::File;
//!
//! let table = CipherTable::major();
//! let index = WordIndex::build(&table, vec!["ten".to_string()]);
//!
//! // Serialize to file
//! let file = File::create("index.csv")?;
//! CsvSerializer::serialize(&index, file)?;
//!
//! // Deserialize from file
//! let file = File::open("index.csv")?;
//! let loaded = CsvSerializer::deserialize(file)?;
//! ```

use std::io::{Read, Write};

use crate::index::WordIndex;

mod csv_impl;
mod json_impl;

pub use self::csv_impl::CsvSerializer;
pub use self::json_impl::JsonSerializer;

/// Trait for serializing and deserializing a word index.
pub trait IndexSerializer {
    /// Serialize an index to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(index: &WordIndex, writer: W) -> Result<(), SerializationError>;

    /// Deserialize an index from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    fn deserialize<R: Read>(reader: R) -> Result<WordIndex, SerializationError>;
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during CSV serialization
    #[error("CSV error")]
    Csv(#[from] csv::Error),
    /// Error during JSON serialization
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
