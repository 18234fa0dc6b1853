// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The batch pipeline: word lists in, report out.
//!
//! 1. Load the keyword pool (no length limit) and the dictionary (capped)
//! 2. Build the [`Engine`] once
//! 3. Expand every dictionary word, in parallel when the feature is on
//! 4. Skip words the engine rejects, render the rest, write the report

pub mod parallel;
pub mod report;
pub mod wordlist;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::types::WordExpansions;

pub use report::{render, render_json, render_markdown, OutputFormat};
pub use wordlist::{parse_word_list, read_word_list, DEFAULT_MAX_WORD_LEN, UNLIMITED};

/// Dictionary used when none is given.
pub const DEFAULT_DICTIONARY: &str = "google-10000-english.txt";

/// Settings for one `generate` run.
#[derive(Clone, Debug)]
pub struct GenerateConfig {
    /// Keyword pool, one keyword per line.
    pub keywords: PathBuf,
    /// Target words to spell, one per line.
    pub dictionary: PathBuf,
    /// Longest dictionary word considered, in characters.
    pub max_word_len: usize,
    /// Shortest dictionary word considered, in characters.
    pub min_word_len: usize,
    pub format: OutputFormat,
    /// Report destination; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Show a progress bar on stderr (parallel builds only).
    pub progress: bool,
    /// Expand words on the rayon pool.
    pub parallel: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            keywords: PathBuf::new(),
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            max_word_len: DEFAULT_MAX_WORD_LEN,
            min_word_len: 1,
            format: OutputFormat::Markdown,
            output: None,
            progress: false,
            parallel: cfg!(feature = "parallel"),
        }
    }
}

/// What a run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub keywords: usize,
    pub words_scanned: usize,
    pub words_skipped: usize,
    pub words_matched: usize,
    pub expansions: usize,
    pub elapsed: Duration,
}

/// Create a progress style for the expansion progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Run the whole pipeline and write the report.
pub fn run_generate(config: &GenerateConfig) -> Result<GenerateSummary> {
    let start = Instant::now();

    // 1. Load word lists
    let keywords = read_word_list(&config.keywords, UNLIMITED)?;
    let dictionary: Vec<String> = read_word_list(&config.dictionary, config.max_word_len)?
        .into_iter()
        .filter(|w| w.chars().count() >= config.min_word_len)
        .collect();
    info!(
        keywords = keywords.len(),
        words = dictionary.len(),
        "loaded word lists"
    );

    // 2. Sort and index the pool
    let engine = Engine::new(keywords);

    // 3. Expand
    let outcomes = expand_all(&engine, &dictionary, config);

    // 4. Drop rejected words, keep the rest in dictionary order
    let mut summary = GenerateSummary {
        keywords: engine.index().len(),
        words_scanned: dictionary.len(),
        ..GenerateSummary::default()
    };
    let mut results: Vec<WordExpansions> = Vec::with_capacity(outcomes.len());
    for (word, outcome) in dictionary.iter().zip(outcomes) {
        match outcome {
            Ok(found) => {
                if !found.is_empty() {
                    summary.words_matched += 1;
                    summary.expansions += found.expansions.len();
                    debug!(word = %word, expansions = found.expansions.len(), "expanded");
                }
                results.push(found);
            }
            Err(e) if e.is_per_word() => {
                warn!(word = %word, error = %e, "skipping word");
                summary.words_skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let rendered = render(&results, config.format)?;
    write_report(config.output.as_deref(), &rendered)?;

    summary.elapsed = start.elapsed();
    info!(
        matched = summary.words_matched,
        expansions = summary.expansions,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "generate finished"
    );
    Ok(summary)
}

fn expand_all(
    engine: &Engine,
    words: &[String],
    config: &GenerateConfig,
) -> Vec<Result<WordExpansions>> {
    if !config.parallel {
        return engine.expand_batch_sequential(words);
    }

    #[cfg(feature = "parallel")]
    {
        let pb = if config.progress {
            ProgressBar::new(words.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_length(words.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Expanding");
        pb.set_message("words...");

        let outcomes = parallel::expand_words_with_progress(engine, words, &pb);
        pb.finish_and_clear();
        outcomes
    }
    #[cfg(not(feature = "parallel"))]
    {
        parallel::expand_words_with_progress(engine, words)
    }
}

/// Write `report` to `path`, or to stdout when `path` is `None`.
pub fn write_report(path: Option<&Path>, report: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, report).map_err(|source| Error::Write {
            target: path.display().to_string(),
            source,
        }),
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(report.as_bytes())
                .and_then(|_| lock.flush())
                .map_err(|source| Error::Write {
                    target: "stdout".to_string(),
                    source,
                })
        }
    }
}
