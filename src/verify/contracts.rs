// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the expansion pipeline.
//!
//! Debug-mode assertions over the invariants the rest of the crate relies on.
//! They compile to nothing in release builds.
//!
//! | Contract Function              | Invariant                                   |
//! |--------------------------------|---------------------------------------------|
//! | `check_pool_sorted`            | pool sorted in `keyword_order`              |
//! | `check_partition_covers`       | parts non-empty, concatenate to the word    |
//! | `check_candidates_capitalized` | matched prefix uppercased, suffix untouched |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Lookup bisects the pool. A violated sort order drops matches without any
//! visible failure, so these checks are the only early warning.

use crate::utils::starts_with_folded;

use super::types::first_unsorted;

/// Check that a keyword pool is sorted in lookup order.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair out of order.
#[inline]
pub fn check_pool_sorted(keywords: &[String]) {
    if cfg!(debug_assertions) {
        if let Some(i) = first_unsorted(keywords) {
            panic!(
                "Contract violation: pool sorted - keywords[{}] ('{}') > keywords[{}] ('{}')",
                i - 1,
                keywords[i - 1],
                i,
                keywords[i]
            );
        }
    }
}

/// Check that `parts` is a composition of `word`.
///
/// # Panics (debug builds only)
/// Panics if a part is empty or the parts don't concatenate to `word`.
#[inline]
pub fn check_partition_covers(word: &str, parts: &[String]) {
    debug_assert!(
        parts.iter().all(|p| !p.is_empty()),
        "Contract violation: partition of '{}' has an empty part: {:?}",
        word,
        parts
    );
    debug_assert!(
        parts.concat() == word,
        "Contract violation: parts {:?} do not concatenate to '{}'",
        parts,
        word
    );
}

/// Check that every candidate matches `part` and is uppercased on exactly the
/// matched prefix.
///
/// # Panics (debug builds only)
/// Panics if a candidate doesn't start with `part` (ignoring case) or its
/// prefix still holds a lowercase ASCII letter.
#[inline]
pub fn check_candidates_capitalized(part: &str, candidates: &[String]) {
    for candidate in candidates {
        debug_assert!(
            starts_with_folded(candidate, part),
            "Contract violation: candidate '{}' does not match part '{}'",
            candidate,
            part
        );
        debug_assert!(
            !candidate.as_bytes()[..part.len().min(candidate.len())]
                .iter()
                .any(u8::is_ascii_lowercase),
            "Contract violation: candidate '{}' not uppercased on '{}'",
            candidate,
            part
        );
    }
}
