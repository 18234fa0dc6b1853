// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! The brute-force functions are the reference the bisection and the engine
//! are checked against: a linear scan per part, no index, no early exit.

#![doc(hidden)]

use crate::types::{pattern_count, CandidateList, CutPattern, ResultSet};
use crate::partition::split;
use crate::utils::{capitalize_prefix, keyword_order, starts_with_folded};

/// Build an owned keyword pool from string literals.
pub fn pool(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Every keyword in `pool` starting with `prefix`, by linear scan.
///
/// Sorted and capitalized the same way [`PrefixIndex::lookup`] is.
///
/// [`PrefixIndex::lookup`]: crate::PrefixIndex::lookup
pub fn brute_force_lookup(prefix: &str, pool: &[String]) -> CandidateList {
    let mut found: Vec<&String> = pool
        .iter()
        .filter(|k| starts_with_folded(k, prefix))
        .collect();
    found.sort_by(|a, b| keyword_order(a, b));

    let chars = prefix.chars().count();
    found
        .into_iter()
        .map(|k| capitalize_prefix(k, chars))
        .collect()
}

/// Every expansion of `word` over `pool`, by trying every cut pattern and
/// scanning the pool for every part.
pub fn brute_force_expansions(word: &str, pool: &[String]) -> ResultSet {
    let chars = word.chars().count();
    let mut out = Vec::new();
    for pattern in 0..pattern_count(chars) {
        let parts = split(word, CutPattern(pattern));
        let lists: Vec<CandidateList> = parts
            .iter()
            .map(|part| brute_force_lookup(part, pool))
            .collect();
        if lists.iter().all(|l| !l.is_empty()) {
            out.push(lists);
        }
    }
    out
}
