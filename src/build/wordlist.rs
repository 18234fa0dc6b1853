// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented word list loading.
//!
//! One word per line. Blank lines are dropped, and so are words longer than the
//! caller's limit: the search is exponential in word length, so the dictionary
//! side is capped (10 characters by default) while keyword pools usually aren't.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Word length limit for keyword pools: none.
pub const UNLIMITED: usize = usize::MAX;

/// Default word length limit for dictionaries of target words.
pub const DEFAULT_MAX_WORD_LEN: usize = 10;

/// Read a word list from `path`, keeping words of at most `max_len` characters.
///
/// Fails with `SourceUnavailable` if the file can't be opened or read.
pub fn read_word_list(path: impl AsRef<Path>, max_len: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let unavailable = |source: io::Error| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let words = parse_word_list(BufReader::new(file), max_len).map_err(unavailable)?;

    debug!(path = %path.display(), words = words.len(), max_len, "loaded word list");
    Ok(words)
}

/// Parse a word list from any buffered reader.
///
/// Surrounding whitespace (including a trailing `\r`) is stripped before the
/// blank and length checks. Length is counted in characters.
pub fn parse_word_list<R: BufRead>(reader: R, max_len: usize) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.chars().count() > max_len {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(words)
}
