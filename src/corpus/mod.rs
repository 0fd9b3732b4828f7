//! Word-list acquisition: loading, saving, and fetching candidate words.
//!
//! The index builder accepts any iterator of words; this module supplies
//! the common sources. A word list is a newline-delimited text file, one
//! word per line:
//!
//! ```text
//! the
//! of
//! and
//! ```
//!
//! Lines are trimmed and lowercased, and anything that is not purely
//! alphabetic (numerals, punctuation, blank lines) is discarded. The cipher
//! still has the final say: the index drops any surviving word it cannot
//! encode.
//!
//! With the `fetch` feature enabled, a list can also be downloaded over
//! HTTP and cached to a local file so repeated runs stay offline
//! ([`load_or_fetch`]).

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::info;

/// Default word-list source: the 10,000 most common English words
/// (no swears variant), of which the first [`DEFAULT_MAX_WORDS`] are used.
pub const DEFAULT_WORD_LIST_URL: &str = "https://raw.githubusercontent.com/first20hours/google-10000-english/master/google-10000-english-usa-no-swears.txt";

/// Default cap on the number of words taken from a fetched list.
pub const DEFAULT_MAX_WORDS: usize = 1000;

/// Normalize raw lines into candidate words.
///
/// Trims, lowercases, and keeps only fully-alphabetic words.
fn normalize<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let word = line.as_ref().trim().to_lowercase();
            (!word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
        })
        .collect()
}

/// Load a word list from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }

    let words = normalize(lines);
    info!(count = words.len(), path = %path.display(), "loaded word list");
    Ok(words)
}

/// Save a word list to a file, one word per line.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_word_list<P: AsRef<Path>>(words: &[String], path: P) -> std::io::Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    for word in words {
        writeln!(file, "{}", word)?;
    }
    info!(count = words.len(), path = %path.display(), "saved word list");
    Ok(())
}

/// Fetch a word list over HTTP.
///
/// Takes the first `max_words` lines of the response body and normalizes
/// them like [`load_word_list`].
///
/// # Errors
///
/// Returns an error on any HTTP or transport failure.
#[cfg(feature = "fetch")]
pub fn fetch_word_list(url: &str, max_words: usize) -> Result<Vec<String>, reqwest::Error> {
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    let words = normalize(body.lines().take(max_words));
    info!(count = words.len(), url, "fetched word list");
    Ok(words)
}

/// Load a word list from a cache file, fetching and caching it on a miss.
///
/// If `path` exists it is loaded directly; otherwise the list is fetched
/// from `url`, saved to `path`, and returned.
///
/// # Errors
///
/// Returns an error if the cache read fails, the fetch fails, or the
/// fetched list cannot be written to the cache (the next run would
/// silently refetch).
#[cfg(feature = "fetch")]
pub fn load_or_fetch<P: AsRef<Path>>(
    path: P,
    url: &str,
    max_words: usize,
) -> std::io::Result<Vec<String>> {
    let path = path.as_ref();
    if path.exists() {
        return load_word_list(path);
    }

    let words = fetch_word_list(url, max_words).map_err(std::io::Error::other)?;
    save_word_list(&words, path)?;
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_filters_non_alphabetic() {
        let words = normalize(["Ten", "  moon  ", "3rd", "it's", "", "dog"]);
        assert_eq!(words, vec!["ten", "moon", "dog"]);
    }

    #[test]
    fn test_load_word_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        fs::write(&path, "Ten\nmoon\n42\n\ncat-dog\ndog\n").unwrap();

        let words = load_word_list(&path).unwrap();
        assert_eq!(words, vec!["ten", "moon", "dog"]);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        let words = vec!["ten".to_string(), "moon".to_string()];
        save_word_list(&words, &path).unwrap();
        assert_eq!(load_word_list(&path).unwrap(), words);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_word_list(temp_dir.path().join("absent.txt")).is_err());
    }

    #[test]
    #[cfg(feature = "fetch")]
    fn test_load_or_fetch_prefers_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cached.txt");
        fs::write(&path, "ten\nmoon\n").unwrap();

        // an unresolvable URL proves no fetch is attempted on a cache hit
        let words = load_or_fetch(&path, "http://invalid.invalid/words.txt", 10).unwrap();
        assert_eq!(words, vec!["ten", "moon"]);
    }
}
