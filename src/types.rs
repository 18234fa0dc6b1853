// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary of an expansion search.
//!
//! A target word of `L` characters has `2^(L-1)` cut patterns. Each pattern
//! picks one composition of the word (a [`Partition`]), and a partition whose
//! every part prefixes some keyword becomes an [`Expansion`].
//!
//! # Invariants
//!
//! - **CutPattern**: `pattern < 2^(L-1)` for the word it is applied to.
//!   Bit `i` set means "cut after character `i`".
//!
//! - **Partition**: parts are non-empty and concatenate back to the word.
//!
//! - **Expansion**: `candidates.len() == parts.len()` and no candidate list
//!   is empty. Every candidate is uppercased on exactly `parts[i].chars().count()`
//!   leading characters.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// A bitmask selecting where a word is cut.
///
/// Bit `i` set means the current part ends right after character `i`. The
/// all-zero pattern keeps the word whole; `2^(L-1) - 1` cuts between every
/// pair of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct CutPattern(pub u64);

impl CutPattern {
    /// The pattern that leaves the word in one piece.
    pub const WHOLE: CutPattern = CutPattern(0);

    /// The pattern that cuts a word of `chars` characters between every pair.
    #[inline]
    pub fn all_cuts(chars: usize) -> Self {
        CutPattern(pattern_count(chars).saturating_sub(1))
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// Whether the word is cut after character `position`.
    #[inline]
    pub fn cuts_after(self, position: usize) -> bool {
        position < 64 && (self.0 >> position) & 1 == 1
    }

    /// Number of parts this pattern produces on a word of `chars` characters.
    #[inline]
    pub fn part_count(self, chars: usize) -> usize {
        let usable = chars.saturating_sub(1).min(64);
        let mask = if usable == 64 { u64::MAX } else { (1u64 << usable) - 1 };
        (self.0 & mask).count_ones() as usize + 1
    }
}

impl From<u64> for CutPattern {
    fn from(value: u64) -> Self {
        CutPattern(value)
    }
}

impl fmt::Display for CutPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

/// Number of cut patterns (and compositions) for a word of `chars` characters.
///
/// `chars = 0` has no compositions. Saturates at `u64::MAX` past 64 characters;
/// the partitioner rejects such words before this matters.
#[inline]
pub fn pattern_count(chars: usize) -> u64 {
    match chars {
        0 => 0,
        n if n > 64 => u64::MAX,
        64 => 1u64 << 63,
        n => 1u64 << (n - 1),
    }
}

// =============================================================================
// COMPOSITE TYPES
// =============================================================================

/// One composition of a target word: ordered, non-empty, consecutive parts.
pub type Partition = Vec<String>;

/// Keywords matching one part, uppercased on the matched prefix.
pub type CandidateList = Vec<String>;

/// The flat result of one word: per successful pattern, per part, the candidates.
pub type ResultSet = Vec<Vec<CandidateList>>;

/// A partition whose every part resolved against the keyword pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    /// The cut pattern that produced `parts`.
    pub pattern: CutPattern,
    /// The composition of the target word.
    pub parts: Partition,
    /// One non-empty candidate list per part, in part order.
    pub candidates: Vec<CandidateList>,
}

impl Expansion {
    /// Number of distinct keyword sequences this expansion spells.
    ///
    /// Saturates rather than overflowing on very large pools.
    pub fn combinations(&self) -> u64 {
        self.candidates
            .iter()
            .fold(1u64, |acc, list| acc.saturating_mul(list.len() as u64))
    }

    /// Drop the provenance, keeping only the candidate lists.
    pub fn into_candidates(self) -> Vec<CandidateList> {
        self.candidates
    }
}

/// All expansions found for one target word, in pattern order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordExpansions {
    pub word: String,
    pub expansions: Vec<Expansion>,
}

impl WordExpansions {
    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }

    /// The nested candidate-list form returned by [`find_expansions`](crate::find_expansions).
    pub fn to_result_set(&self) -> ResultSet {
        self.expansions
            .iter()
            .map(|e| e.candidates.clone())
            .collect()
    }
}
