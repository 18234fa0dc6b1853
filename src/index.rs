// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix lookup over a sorted keyword pool.
//!
//! Keywords sharing a k-character prefix sit next to each other in a sorted
//! pool, so a lookup is two bisections under a comparator that only looks at
//! the first k characters, then a copy of the range in between. O(log n + m).
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POOL_SORTED**: keywords are sorted in [`keyword_order`](crate::utils::keyword_order).
//!    Held by [`SortedKeywords`]; the truncated comparator below is only monotone
//!    over that order.
//! 2. **LOOKUP_COMPLETE**: `lookup(p)` returns every keyword `k` with
//!    `k[..|p|] == p` ignoring ASCII case, and nothing else
//! 3. **PREFIX_CAPITALIZED**: each returned keyword is uppercased on exactly
//!    its first `|p|` characters

use std::cmp::Ordering;
use std::ops::Range;

use crate::types::CandidateList;
use crate::utils::{capitalize_prefix, fold, truncated_cmp};
use crate::verify::contracts::{check_candidates_capitalized, check_pool_sorted};
use crate::verify::{InvariantError, SortedKeywords};

/// A sorted keyword pool answering case-insensitive prefix queries.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    keywords: SortedKeywords,
}

impl PrefixIndex {
    /// Build an index from an unordered pool. Sorting happens here.
    pub fn new(keywords: Vec<String>) -> Self {
        Self::from_keywords(SortedKeywords::new(keywords))
    }

    /// Build an index from a pool the caller claims is already sorted.
    pub fn from_sorted(keywords: Vec<String>) -> Result<Self, InvariantError> {
        SortedKeywords::from_sorted(keywords).map(Self::from_keywords)
    }

    /// Build an index over a validated pool.
    pub fn from_keywords(keywords: SortedKeywords) -> Self {
        check_pool_sorted(keywords.as_slice());
        Self { keywords }
    }

    /// Number of keywords in the pool.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// The underlying sorted pool.
    pub fn keywords(&self) -> &SortedKeywords {
        &self.keywords
    }

    /// Positions in the sorted pool of every keyword starting with `prefix`.
    ///
    /// An empty prefix matches the whole pool.
    pub fn range(&self, prefix: &str) -> Range<usize> {
        let folded = fold(prefix);
        let pool = self.keywords.as_slice();

        // INVARIANT: POOL_SORTED
        // Truncating every key to |prefix| bytes preserves the pool order, so
        // both predicates are monotone and partition_point is valid.
        let start = pool.partition_point(|k| truncated_cmp(k, &folded) == Ordering::Less);
        let len = pool[start..]
            .partition_point(|k| truncated_cmp(k, &folded) == Ordering::Equal);
        start..start + len
    }

    /// How many keywords start with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.range(prefix).len()
    }

    /// Whether any keyword starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        !self.range(prefix).is_empty()
    }

    /// Keywords starting with `prefix`, uppercased on the matched characters.
    ///
    /// Returns an empty list when nothing matches, including when `prefix` is
    /// longer than every keyword.
    ///
    /// # Example
    ///
    /// ```
    /// use backronym::PrefixIndex;
    ///
    /// let index = PrefixIndex::new(vec!["cat".into(), "car".into(), "dog".into()]);
    /// assert_eq!(index.lookup("CA"), vec!["CAr", "CAt"]);
    /// assert!(index.lookup("cart").is_empty());
    /// ```
    pub fn lookup(&self, prefix: &str) -> CandidateList {
        let range = self.range(prefix);
        let chars = prefix.chars().count();
        let candidates: CandidateList = self.keywords.as_slice()[range]
            .iter()
            .map(|k| capitalize_prefix(k, chars))
            .collect();

        // INVARIANT: PREFIX_CAPITALIZED
        check_candidates_capitalized(prefix, &candidates);
        candidates
    }
}

impl From<Vec<String>> for PrefixIndex {
    fn from(keywords: Vec<String>) -> Self {
        Self::new(keywords)
    }
}

impl FromIterator<String> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
