//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "libmajor")]
#[command(about = "Mnemonic phrase generation for numbers using the Major System")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a mnemonic phrase for a number
    Generate {
        /// Number to convert (decimal digits)
        number: String,

        /// Word list file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,

        /// Tagged lexicon file; enables grammatical phrase templates
        #[arg(short, long)]
        lexicon: Option<PathBuf>,

        /// Maximum number of content words in the phrase
        #[arg(short, long, default_value = "3")]
        max_words: usize,

        /// Filler word prefixed to the phrase
        #[arg(short, long, default_value = "the")]
        filler: String,

        /// Print the bare phrase without the filler word
        #[arg(long)]
        no_filler: bool,

        /// RNG seed for reproducible word selection
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show index statistics for a word list
    Info {
        /// Word list file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,

        /// Tagged lexicon file; counts roles when given
        #[arg(short, long)]
        lexicon: Option<PathBuf>,
    },

    /// Show word-length distributions as a terminal histogram
    Stats {
        /// Word list file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,
    },

    /// Export the processed index to CSV or JSON
    Export {
        /// Word list file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,

        /// Tagged lexicon file; exported entries carry roles when given
        #[arg(short, long)]
        lexicon: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Download a word list and cache it locally
    #[cfg(feature = "fetch")]
    Fetch {
        /// Output file for the cached word list
        #[arg(short, long)]
        output: PathBuf,

        /// Source URL
        #[arg(short, long, default_value = crate::corpus::DEFAULT_WORD_LIST_URL)]
        url: String,

        /// Maximum number of words to keep
        #[arg(short, long, default_value_t = crate::corpus::DEFAULT_MAX_WORDS)]
        max_words: usize,
    },
}

/// Export file formats.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated rows with derived length columns
    Csv,
    /// Pretty-printed JSON array
    Json,
}
