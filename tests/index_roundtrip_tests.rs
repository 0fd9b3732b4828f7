//! Integration tests for index export and reload.

#![cfg(feature = "serialization")]

use std::fs::File;

use tempfile::TempDir;

use libmajor::cipher::CipherTable;
use libmajor::index::WordIndex;
use libmajor::lexicon::{FnClassifier, WordRole};
use libmajor::serialization::{CsvSerializer, IndexSerializer, JsonSerializer};

fn sample_index() -> WordIndex {
    let table = CipherTable::major();
    let classify = FnClassifier(|word: &str| match word {
        "big" => WordRole::Adjective,
        "dog" | "ten" => WordRole::Noun,
        "run" => WordRole::Verb,
        _ => WordRole::Unknown,
    });
    WordIndex::build_classified(
        &table,
        ["big", "dog", "run", "ten", "window"].map(String::from),
        &classify,
    )
}

#[test]
fn test_csv_export_reload_preserves_lookups() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("index.csv");
    let index = sample_index();

    CsvSerializer::serialize(&index, File::create(&path).unwrap()).unwrap();
    let loaded = CsvSerializer::deserialize(File::open(&path).unwrap()).unwrap();

    assert_eq!(loaded.len(), index.len());
    assert!(loaded.is_classified());
    for digits in ["96", "16", "42", "12"] {
        for role in [None, Some(WordRole::Noun), Some(WordRole::Adjective)] {
            assert_eq!(loaded.lookup(digits, role), index.lookup(digits, role));
        }
    }
}

#[test]
fn test_json_export_reload_preserves_entries() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("index.json");
    let index = sample_index();

    JsonSerializer::serialize(&index, File::create(&path).unwrap()).unwrap();
    let loaded = JsonSerializer::deserialize(File::open(&path).unwrap()).unwrap();

    let entries: Vec<_> = index.entries().cloned().collect();
    let loaded_entries: Vec<_> = loaded.entries().cloned().collect();
    assert_eq!(entries, loaded_entries);
}
