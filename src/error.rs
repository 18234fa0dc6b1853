// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Two kinds of failure leave the core. `InvalidInput` is scoped to a single
//! target word: batch drivers log it and move on to the next word.
//! `SourceUnavailable` comes from the word list loaders and is fatal to the
//! run, since nothing can be expanded without a keyword pool. `Write` and
//! `Encode` belong to the report stage and are fatal too.
//!
//! A cut pattern whose parts can't all be resolved is not an
//! error at all. It is [`NoExpansion`](crate::NoExpansion), a plain value the
//! engine consumes per pattern.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the expansion engine and its loaders.
#[derive(Error, Debug)]
pub enum Error {
    /// The target word can't be partitioned.
    #[error("invalid target word {word:?}: {reason}")]
    InvalidInput { word: String, reason: InputProblem },

    /// A word list could not be read.
    #[error("can't open word list {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report could not be written.
    #[error("can't write report to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    /// The report could not be encoded as JSON.
    #[error("can't encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why a target word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    Empty,
    /// More characters than a `u64` cut pattern can address.
    TooLong { chars: usize, max: usize },
}

impl std::fmt::Display for InputProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputProblem::Empty => write!(f, "word is empty"),
            InputProblem::TooLong { chars, max } => {
                write!(f, "word has {} characters, limit is {}", chars, max)
            }
        }
    }
}

impl Error {
    /// True when the failure only affects one target word.
    pub fn is_per_word(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}

/// Result type alias for expansion operations.
pub type Result<T> = std::result::Result<T, Error>;
