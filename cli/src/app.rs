//! The read, tokenize, collect and write pipeline.

use anyhow::Context;
use lexitree::text::{collect_vocabulary, read_document, tokenize, write_sorted};

use crate::config::AppConfig;

/// Shape of the tree built during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeStats {
    /// Longest root-to-leaf path, in nodes.
    pub height: usize,
    /// Black nodes on every root-to-leaf path.
    pub black_height: usize,
}

/// What a run produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Words read, duplicates included.
    pub tokens: usize,
    /// Distinct words written.
    pub unique: usize,
    /// Tree shape, present when statistics were requested.
    pub stats: Option<TreeStats>,
}

/// Runs the pipeline described by `config`.
///
/// # Errors
///
/// Fails if the input cannot be read, the output cannot be written, or the
/// tree fails validation when statistics are requested.
pub fn run(config: &AppConfig) -> anyhow::Result<RunSummary> {
    let text = read_document(&config.input)
        .with_context(|| format!("Failed to load input document {}", config.input.display()))?;

    let vocabulary = collect_vocabulary(tokenize(&text));
    tracing::info!(
        tokens = vocabulary.token_count(),
        unique = vocabulary.unique_count(),
        "Built vocabulary"
    );

    let stats = if config.stats {
        let words = vocabulary.words();
        let black_height = words
            .validate()
            .context("Vocabulary tree failed validation")?;
        let stats = TreeStats {
            height: words.height(),
            black_height,
        };
        tracing::info!(
            height = stats.height,
            black_height = stats.black_height,
            "Tree shape"
        );
        Some(stats)
    } else {
        None
    };

    let written = write_sorted(&config.output, vocabulary.words())
        .with_context(|| format!("Failed to write output {}", config.output.display()))?;
    tracing::info!(path = %config.output.display(), lines = written, "Wrote sorted words");

    Ok(RunSummary {
        tokens: vocabulary.token_count(),
        unique: written,
        stats,
    })
}
