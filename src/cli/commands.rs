//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cipher::CipherTable;
use crate::corpus;
use crate::index::WordIndex;
use crate::lexicon::LexiconClassifier;
use crate::search::{PhraseSearcher, SearchConfig};
use crate::serialization::{CsvSerializer, IndexSerializer, JsonSerializer};

use super::args::{Commands, ExportFormat};

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            number,
            dict,
            lexicon,
            max_words,
            filler,
            no_filler,
            seed,
        } => cmd_generate(&number, &dict, lexicon.as_deref(), max_words, filler, no_filler, seed),
        Commands::Info { dict, lexicon } => cmd_info(&dict, lexicon.as_deref()),
        Commands::Stats { dict } => cmd_stats(&dict),
        Commands::Export {
            dict,
            lexicon,
            output,
            format,
        } => cmd_export(&dict, lexicon.as_deref(), &output, format),
        #[cfg(feature = "fetch")]
        Commands::Fetch {
            output,
            url,
            max_words,
        } => cmd_fetch(&output, &url, max_words),
    }
}

/// Load a word list and build the index, role-aware when a lexicon is given.
fn build_index(dict: &Path, lexicon: Option<&Path>) -> Result<WordIndex> {
    let table = CipherTable::major();
    let words = corpus::load_word_list(dict)
        .with_context(|| format!("failed to load word list {}", dict.display()))?;

    let index = match lexicon {
        Some(path) => {
            let classifier = LexiconClassifier::load(path)
                .with_context(|| format!("failed to load lexicon {}", path.display()))?;
            WordIndex::build_classified(&table, words, &classifier)
        }
        None => WordIndex::build(&table, words),
    };

    if index.is_empty() {
        anyhow::bail!("no usable words in {}", dict.display());
    }
    Ok(index)
}

fn cmd_generate(
    number: &str,
    dict: &Path,
    lexicon: Option<&Path>,
    max_words: usize,
    filler: String,
    no_filler: bool,
    seed: Option<u64>,
) -> Result<()> {
    let index = build_index(dict, lexicon)?;

    let config = SearchConfig {
        max_words,
        role_aware: lexicon.is_some(),
        filler: (!no_filler).then_some(filler),
    };
    let searcher = PhraseSearcher::new(&index, config);

    let result = match seed {
        Some(seed) => searcher.search_with(number, &mut StdRng::seed_from_u64(seed)),
        None => searcher.search(number),
    }?;

    match result {
        Some(phrase) => println!("{} -> {}", number, phrase.green().bold()),
        None => println!("{} -> {}", number, "no match".yellow()),
    }
    Ok(())
}

fn cmd_info(dict: &Path, lexicon: Option<&Path>) -> Result<()> {
    let index = build_index(dict, lexicon)?;

    println!("Indexed words: {}", index.len());
    println!("Role-aware: {}", index.is_classified());

    if index.is_classified() {
        let mut by_role: BTreeMap<String, usize> = BTreeMap::new();
        for entry in index.entries() {
            *by_role.entry(entry.role.to_string()).or_default() += 1;
        }
        for (role, count) in by_role {
            println!("  {}: {}", role, count);
        }
    }
    Ok(())
}

fn cmd_stats(dict: &Path) -> Result<()> {
    let index = build_index(dict, None)?;
    let histogram = index.length_histogram();

    println!("{}", "Word lengths".bold());
    print_histogram(&histogram.word_lengths);
    println!();
    println!("{}", "Skeleton lengths".bold());
    print_histogram(&histogram.skeleton_lengths);
    Ok(())
}

/// Render one length distribution as horizontal bars.
fn print_histogram(buckets: &BTreeMap<usize, usize>) {
    const MAX_BAR: usize = 50;

    let max_count = buckets.values().copied().max().unwrap_or(0).max(1);
    for (length, count) in buckets {
        let bar_len = (count * MAX_BAR).div_ceil(max_count);
        let bar: String = "█".repeat(bar_len);
        println!("{:>3} | {} {}", length, bar.green(), count);
    }
}

fn cmd_export(
    dict: &Path,
    lexicon: Option<&Path>,
    output: &Path,
    format: ExportFormat,
) -> Result<()> {
    let index = build_index(dict, lexicon)?;

    let file = File::create(output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;
    match format {
        ExportFormat::Csv => CsvSerializer::serialize(&index, file)?,
        ExportFormat::Json => JsonSerializer::serialize(&index, file)?,
    }

    println!("Exported {} entries to {}", index.len(), output.display());
    Ok(())
}

#[cfg(feature = "fetch")]
fn cmd_fetch(output: &Path, url: &str, max_words: usize) -> Result<()> {
    let words = corpus::fetch_word_list(url, max_words)
        .with_context(|| format!("failed to fetch word list from {}", url))?;
    corpus::save_word_list(&words, output)
        .with_context(|| format!("failed to save word list to {}", output.display()))?;

    println!("Saved {} words to {}", words.len(), output.display());
    Ok(())
}
