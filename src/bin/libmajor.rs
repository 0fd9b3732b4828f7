//! CLI tool for Major System mnemonic phrase generation.
//!
//! This binary provides a command-line interface for converting numbers
//! into memorable phrases backed by a word-list index.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libmajor::cli::args::Cli;
use libmajor::cli::commands;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "libmajor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    commands::execute(cli.command)
}
