// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compositions of a word.
//!
//! A word of `L` characters has `L - 1` gaps between characters, and each gap is
//! either cut or not. Reading the gaps as the bits of an integer gives a
//! bijection between `0..2^(L-1)` and the compositions of the word, so the
//! enumeration is a counting loop.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **COVERAGE**: the parts of `split(word, p)` concatenate to `word`
//! 2. **NON_EMPTY**: every part holds at least one character
//! 3. **ORDER**: `compositions` yields patterns in increasing value
//!
//! Output order is observable: report numbering follows it.

use crate::error::{Error, InputProblem, Result};
use crate::types::{pattern_count, CutPattern, Partition};

/// Longest word the partitioner accepts. `L - 1` interior gaps must fit a `u64`.
pub const MAX_WORD_CHARS: usize = 64;

/// Split `word` at the gaps selected by `pattern`.
///
/// Bits at or beyond the last character are ignored, so the final part always
/// runs to the end of the word. An empty word yields no parts.
pub fn split(word: &str, pattern: CutPattern) -> Partition {
    let mut parts = Vec::with_capacity(pattern.part_count(word.chars().count()));
    let mut start = 0usize;

    for (i, (byte_idx, ch)) in word.char_indices().enumerate() {
        let end = byte_idx + ch.len_utf8();
        if end < word.len() && pattern.cuts_after(i) {
            parts.push(word[start..end].to_string());
            start = end;
        }
    }

    // INVARIANT: COVERAGE
    // The tail after the last cut is always pushed, so nothing is dropped.
    if start < word.len() {
        parts.push(word[start..].to_string());
    }

    parts
}

/// Lazily enumerate every composition of `word`, in cut-pattern order.
///
/// Fails with `InvalidInput` on an empty word or one longer than
/// [`MAX_WORD_CHARS`]. The iterator is cheap to recreate, so callers wanting a
/// second pass just call this again.
///
/// # Example
///
/// ```
/// use backronym::compositions;
///
/// let parts: Vec<_> = compositions("abc").unwrap().collect();
/// assert_eq!(parts[0], vec!["abc"]);
/// assert_eq!(parts[1], vec!["a", "bc"]);
/// assert_eq!(parts[3], vec!["a", "b", "c"]);
/// ```
pub fn compositions(word: &str) -> Result<Compositions<'_>> {
    let chars = validate_word(word)?;
    Ok(Compositions {
        word,
        next: 0,
        end: pattern_count(chars),
    })
}

/// Check that `word` can be partitioned, returning its character count.
pub fn validate_word(word: &str) -> Result<usize> {
    let chars = word.chars().count();
    let problem = match chars {
        0 => Some(InputProblem::Empty),
        n if n > MAX_WORD_CHARS => Some(InputProblem::TooLong {
            chars: n,
            max: MAX_WORD_CHARS,
        }),
        _ => None,
    };

    match problem {
        Some(reason) => Err(Error::InvalidInput {
            word: word.to_string(),
            reason,
        }),
        None => Ok(chars),
    }
}

/// Iterator over `(pattern, partition)` pairs of one word.
#[derive(Debug, Clone)]
pub struct Compositions<'a> {
    word: &'a str,
    next: u64,
    end: u64,
}

impl<'a> Compositions<'a> {
    /// Yield the cut pattern alongside each partition.
    pub fn with_patterns(self) -> WithPatterns<'a> {
        WithPatterns { inner: self }
    }

    fn advance(&mut self) -> Option<(CutPattern, Partition)> {
        if self.next >= self.end {
            return None;
        }
        // INVARIANT: ORDER
        let pattern = CutPattern(self.next);
        self.next += 1;
        Some((pattern, split(self.word, pattern)))
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.end - self.next).unwrap_or(usize::MAX)
    }
}

impl Iterator for Compositions<'_> {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|(_, parts)| parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

/// [`Compositions`] that also reports the pattern of each partition.
#[derive(Debug, Clone)]
pub struct WithPatterns<'a> {
    inner: Compositions<'a>,
}

impl Iterator for WithPatterns<'_> {
    type Item = (CutPattern, Partition);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
