// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Drive the search for one target word, or a batch of them.
//!
//! For each cut pattern in increasing order: split, expand, keep on success,
//! skip on [`NoExpansion`]. Nothing is cached between words, and the index is
//! only ever read, so one `Engine` serves any number of threads.
//!
//! # Ordering
//!
//! Expansions of a word come out in pattern order. Batches come out in input
//! order, also when expanded in parallel: rayon's indexed `collect` places
//! each result by position, not by completion time.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::expand::{expand, NoExpansion};
use crate::index::PrefixIndex;
use crate::partition::compositions;
use crate::types::{Expansion, ResultSet, WordExpansions};
use crate::verify::contracts::check_partition_covers;
use crate::verify::SortedKeywords;

/// Find every expansion of `word` over `pool`.
///
/// This is the crate's one-shot entry point. The pool is sorted here, so any
/// order is accepted; to reuse one pool across many words build an [`Engine`]
/// instead.
///
/// The result has one entry per successful cut pattern, one candidate list per
/// part within it.
///
/// # Example
///
/// ```
/// use backronym::find_expansions;
///
/// let pool = vec!["cat".to_string(), "car".to_string(), "dog".to_string()];
/// let found = find_expansions("cd", &pool).unwrap();
/// assert_eq!(found, vec![vec![vec!["Car", "Cat"], vec!["Dog"]]]);
/// ```
pub fn find_expansions(word: &str, pool: &[String]) -> Result<ResultSet> {
    let engine = Engine::new(pool.to_vec());
    Ok(engine.expansions(word)?.to_result_set())
}

/// A keyword pool prepared for repeated expansion searches.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    index: PrefixIndex,
}

impl Engine {
    /// Sort `keywords` and index them.
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            index: PrefixIndex::new(keywords),
        }
    }

    /// Wrap an existing index.
    pub fn with_index(index: PrefixIndex) -> Self {
        Self { index }
    }

    /// Use a pool that has already been sorted and validated.
    pub fn from_keywords(keywords: SortedKeywords) -> Self {
        Self::with_index(PrefixIndex::from_keywords(keywords))
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// All expansions of `word`, in increasing cut-pattern order.
    ///
    /// Fails only when `word` itself is unusable (empty or too long).
    pub fn expansions(&self, word: &str) -> Result<WordExpansions> {
        let mut expansions = Vec::new();

        for (pattern, parts) in compositions(word)?.with_patterns() {
            // INVARIANT: COVERAGE
            check_partition_covers(word, &parts);
            match expand(&parts, &self.index) {
                Ok(candidates) => expansions.push(Expansion {
                    pattern,
                    parts,
                    candidates,
                }),
                Err(NoExpansion { .. }) => continue,
            }
        }

        Ok(WordExpansions {
            word: word.to_string(),
            expansions,
        })
    }

    /// Count expansions without materializing candidate lists.
    pub fn count_expansions(&self, word: &str) -> Result<usize> {
        Ok(compositions(word)?
            .filter(|parts| crate::expand::is_expandable(parts, &self.index))
            .count())
    }

    /// Expand every word of a batch, results in input order.
    ///
    /// Each entry is that word's own outcome; a bad word doesn't stop the batch.
    pub fn expand_batch<S>(&self, words: &[S]) -> Vec<Result<WordExpansions>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            words
                .par_iter()
                .map(|w| self.expansions(w.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.expand_batch_sequential(words)
        }
    }

    /// [`expand_batch`](Self::expand_batch) on the calling thread only.
    pub fn expand_batch_sequential<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> Vec<Result<WordExpansions>> {
        words.iter().map(|w| self.expansions(w.as_ref())).collect()
    }
}
