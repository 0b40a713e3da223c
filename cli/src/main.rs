//! Command-line driver for lexitree.
//!
//! Reads a document, collects its distinct normalized words into a persistent
//! ordered set and writes them in ascending order, one per line.
//!
//! ```bash
//! lexitree war_and_peace.txt -o output.txt --stats
//! ```

mod app;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, Overrides};

#[derive(Parser)]
#[command(name = "lexitree")]
#[command(about = "Write the sorted vocabulary of a document")]
#[command(version)]
struct Cli {
    /// Document to read [env: LEXITREE_INPUT] [default: war_and_peace.txt]
    input: Option<PathBuf>,

    /// File to write the sorted words to [env: LEXITREE_OUTPUT] [default: output.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate the tree and log its height and black height
    #[arg(long)]
    stats: bool,

    /// Log filter used when RUST_LOG is unset [env: LEXITREE_LOG] [default: info]
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

impl From<Cli> for Overrides {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            log_filter: cli.log,
            stats: cli.stats,
        }
    }
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("Invalid log filter {default_filter:?}"))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()
        .context("Failed to load configuration")?
        .with_overrides(cli.into());

    init_tracing(&config.log_filter)?;

    tracing::info!(
        input = %config.input.display(),
        output = %config.output.display(),
        "Starting lexitree"
    );

    let summary = app::run(&config)?;

    tracing::info!(
        tokens = summary.tokens,
        unique = summary.unique,
        validated = summary.stats.is_some(),
        "Finished"
    );
    Ok(())
}
