// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the backronym command-line interface.
//!
//! Three subcommands: `generate` to scan a dictionary for words your keywords
//! can spell, `expand` to try specific words, and `lookup` to see which
//! keywords a prefix reaches.

pub mod display;

use std::path::PathBuf;

use backronym::build::{OutputFormat, DEFAULT_DICTIONARY, DEFAULT_MAX_WORD_LEN};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "backronym",
    about = "Find every way to spell a word with the prefixes of your keywords",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a dictionary for words the keywords can spell
    Generate {
        /// Keyword file, one keyword per line
        keywords: PathBuf,

        /// Dictionary of target words, one per line
        #[arg(env = "BACKRONYM_DICTIONARY", default_value = DEFAULT_DICTIONARY)]
        dictionary: PathBuf,

        /// Skip dictionary words longer than this many characters
        #[arg(long, env = "BACKRONYM_MAX_WORD_LEN", default_value_t = DEFAULT_MAX_WORD_LEN)]
        max_len: usize,

        /// Skip dictionary words shorter than this many characters
        #[arg(long, default_value_t = 1)]
        min_len: usize,

        /// Report format: markdown or json
        #[arg(short, long, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Expand words on the calling thread only
        #[arg(long)]
        no_parallel: bool,

        /// No progress bar or summary line
        #[arg(short, long)]
        quiet: bool,
    },

    /// Expand specific words
    Expand {
        /// Keyword file, one keyword per line
        keywords: PathBuf,

        /// Words to expand
        #[arg(required = true)]
        words: Vec<String>,

        /// Report format: markdown or json
        #[arg(short, long, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },

    /// List the keywords starting with a prefix
    Lookup {
        /// Keyword file, one keyword per line
        keywords: PathBuf,

        /// Prefix to look up (case-insensitive)
        prefix: String,
    },
}
