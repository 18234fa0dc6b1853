// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding and comparison helpers.
//!
//! Only ASCII letters fold. Everything else compares byte for byte, which keeps
//! the truncated comparison used by prefix lookup consistent with the full
//! ordering used to sort the pool.

use std::cmp::Ordering;

/// Bytes of `s` with ASCII letters lowercased.
#[inline]
fn folded(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.bytes().map(|b| b.to_ascii_lowercase())
}

/// ASCII-lowercase a string.
pub fn fold(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// Case-insensitive lexicographic comparison.
#[inline]
pub fn folded_cmp(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

/// The order the keyword pool is sorted in: folded comparison, ties broken by
/// the raw bytes so that the order is total and deterministic.
#[inline]
pub fn keyword_order(a: &str, b: &str) -> Ordering {
    folded_cmp(a, b).then_with(|| a.cmp(b))
}

/// Compare the first `folded_prefix.len()` bytes of `keyword` (folded) against
/// an already-folded prefix.
///
/// A keyword shorter than the prefix compares on its whole length and so can
/// only be `Less` or `Greater`, never `Equal`.
#[inline]
pub fn truncated_cmp(keyword: &str, folded_prefix: &str) -> Ordering {
    folded(keyword)
        .take(folded_prefix.len())
        .cmp(folded_prefix.bytes())
}

/// Uppercase the first `chars` characters of `word`, leaving the rest as stored.
pub fn capitalize_prefix(word: &str, chars: usize) -> String {
    let split = word
        .char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    let mut out = word.to_string();
    out[..split].make_ascii_uppercase();
    out
}

/// Whether `word` starts with `prefix`, ignoring ASCII case.
#[inline]
pub fn starts_with_folded(word: &str, prefix: &str) -> bool {
    word.len() >= prefix.len()
        && word.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
