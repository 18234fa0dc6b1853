// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! A keyword pool is only searchable once it is sorted in [`keyword_order`].
//! `SortedKeywords` checks (or establishes) that at construction and guarantees
//! it forever after, so [`PrefixIndex`](crate::PrefixIndex) never has to.
//!
//! # Example
//!
//! ```
//! use backronym::SortedKeywords;
//!
//! // Sorting construction always succeeds
//! let pool = SortedKeywords::new(vec!["dog".into(), "Cat".into()]);
//! assert_eq!(pool.as_slice(), ["Cat", "dog"]);
//!
//! // Validating construction rejects out-of-order input
//! assert!(SortedKeywords::from_sorted(vec!["dog".into(), "cat".into()]).is_err());
//! ```

use crate::utils::keyword_order;
use std::cmp::Ordering;
use thiserror::Error;

/// Error type for invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The pool is out of order at `position` (`pool[position - 1] > pool[position]`).
    #[error("keyword pool not sorted at position {position}: {previous:?} > {current:?}")]
    UnsortedPool {
        position: usize,
        previous: String,
        current: String,
    },
}

/// A keyword pool sorted case-insensitively, ties broken by raw bytes.
///
/// # Invariants (enforced at construction)
///
/// - `∀ i. keyword_order(pool[i], pool[i + 1]) != Greater`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedKeywords {
    keywords: Vec<String>,
}

impl SortedKeywords {
    /// Sort `keywords` into lookup order. Duplicates are kept.
    pub fn new(mut keywords: Vec<String>) -> Self {
        keywords.sort_unstable_by(|a, b| keyword_order(a, b));
        Self { keywords }
    }

    /// Accept an already-sorted pool, verifying the order.
    pub fn from_sorted(keywords: Vec<String>) -> Result<Self, InvariantError> {
        if let Some(position) = first_unsorted(&keywords) {
            return Err(InvariantError::UnsortedPool {
                position,
                previous: keywords[position - 1].clone(),
                current: keywords[position].clone(),
            });
        }
        Ok(Self { keywords })
    }

    /// Get the number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Get a keyword by position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.keywords.get(index).map(String::as_str)
    }

    /// View the pool as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    /// Iterate over keywords in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Consume and return the underlying vector (still sorted).
    pub fn into_inner(self) -> Vec<String> {
        self.keywords
    }
}

impl From<Vec<String>> for SortedKeywords {
    fn from(keywords: Vec<String>) -> Self {
        Self::new(keywords)
    }
}

impl FromIterator<String> for SortedKeywords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Position of the first element that sorts before its predecessor.
pub fn first_unsorted(keywords: &[String]) -> Option<usize> {
    keywords
        .windows(2)
        .position(|pair| keyword_order(&pair[0], &pair[1]) == Ordering::Greater)
        .map(|i| i + 1)
}
