// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resolve one partition against the keyword pool.
//!
//! Most cut patterns fail: with a sparse pool, long parts rarely prefix
//! anything. Failure is therefore a value ([`NoExpansion`]) the engine matches
//! on, not an error that unwinds through the call stack.

use std::fmt;

use crate::index::PrefixIndex;
use crate::types::CandidateList;

/// A partition had a part no keyword starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoExpansion {
    /// Position of the first unmatched part.
    pub part_index: usize,
    /// The unmatched part itself.
    pub part: String,
}

impl fmt::Display for NoExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no keyword starts with part {} ({:?})",
            self.part_index, self.part
        )
    }
}

/// Look up every part of `parts`, one candidate list per part.
///
/// Stops at the first part with no matches. Parts are expected to be non-empty;
/// an empty part would match the whole pool.
pub fn expand<S: AsRef<str>>(
    parts: &[S],
    index: &PrefixIndex,
) -> Result<Vec<CandidateList>, NoExpansion> {
    let mut lists = Vec::with_capacity(parts.len());

    for (part_index, part) in parts.iter().enumerate() {
        let part = part.as_ref();
        let candidates = index.lookup(part);
        if candidates.is_empty() {
            return Err(NoExpansion {
                part_index,
                part: part.to_string(),
            });
        }
        lists.push(candidates);
    }

    Ok(lists)
}

/// Whether every part has at least one match, without building candidate lists.
pub fn is_expandable<S: AsRef<str>>(parts: &[S], index: &PrefixIndex) -> bool {
    parts.iter().all(|p| index.contains_prefix(p.as_ref()))
}
