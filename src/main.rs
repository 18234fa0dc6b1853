// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

use backronym::build::{
    read_word_list, render, run_generate, write_report, GenerateConfig, OutputFormat, UNLIMITED,
};
use backronym::{Engine, PrefixIndex, Result};

mod cli;
use cli::display::{self, Stream};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            keywords,
            dictionary,
            max_len,
            min_len,
            format,
            output,
            no_parallel,
            quiet,
        } => {
            let progress = !quiet && display::use_colors(Stream::Stderr);
            let config = GenerateConfig {
                keywords,
                dictionary,
                max_word_len: max_len,
                min_word_len: min_len,
                format,
                output,
                progress,
                parallel: !no_parallel,
            };
            let summary = run_generate(&config)?;
            if !quiet {
                eprintln!(
                    "{}",
                    display::summary_line(display::use_colors(Stream::Stderr), &summary)
                );
            }
            Ok(())
        }
        Commands::Expand {
            keywords,
            words,
            format,
        } => expand_words(&keywords, &words, format),
        Commands::Lookup { keywords, prefix } => lookup_prefix(&keywords, &prefix),
    }
}

/// Expand the given words and print the report. Bad words are reported and skipped.
fn expand_words(keywords: &std::path::Path, words: &[String], format: OutputFormat) -> Result<()> {
    let engine = Engine::new(read_word_list(keywords, UNLIMITED)?);

    let mut found = Vec::with_capacity(words.len());
    for outcome in engine.expand_batch(words) {
        match outcome {
            Ok(expansions) => found.push(expansions),
            Err(e) if e.is_per_word() => eprintln!("⚠️  {}", e),
            Err(e) => return Err(e),
        }
    }

    if found.iter().all(|w| w.is_empty()) {
        eprintln!("No expansions found.");
        return Ok(());
    }
    write_report(None, &render(&found, format)?)
}

/// Print the candidates for one prefix in a box.
fn lookup_prefix(keywords: &std::path::Path, prefix: &str) -> Result<()> {
    let index = PrefixIndex::new(read_word_list(keywords, UNLIMITED)?);
    let candidates = index.lookup(prefix);
    let colors = display::use_colors(Stream::Stdout);
    let matched = prefix.chars().count();

    println!(
        "{}",
        display::section_top(colors, &format!("{} ({} of {})", prefix, candidates.len(), index.len()))
    );
    if candidates.is_empty() {
        println!("{}", display::row("no keyword starts with this prefix"));
    }
    for candidate in &candidates {
        println!("{}", display::row(&display::candidate(colors, candidate, matched)));
    }
    println!("{}", display::section_bot());
    Ok(())
}
