// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel expansion of a dictionary.
//!
//! Each target word is an independent search over the same read-only index, so
//! a dictionary is embarrassingly parallel. Rayon's indexed `collect` keeps the
//! results in dictionary order no matter which thread finishes first.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::engine::Engine;
use crate::error::Result;
use crate::types::WordExpansions;

/// Expand all `words` in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn expand_words_with_progress(
    engine: &Engine,
    words: &[String],
    progress: &ProgressBar,
) -> Vec<Result<WordExpansions>> {
    let counter = AtomicUsize::new(0);
    let total = words.len();

    words
        .par_iter()
        .map(|word| {
            let result = engine.expansions(word);

            // Update progress
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count.is_multiple_of(100) || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            result
        })
        .collect()
}

/// Expand all `words`.
/// Non-parallel fallback (no-op progress).
#[cfg(not(feature = "parallel"))]
pub fn expand_words_with_progress(engine: &Engine, words: &[String]) -> Vec<Result<WordExpansions>> {
    engine.expand_batch_sequential(words)
}
