//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

pub use backronym::testing::{brute_force_expansions, brute_force_lookup, pool};

/// The pool used throughout the docs: two `ca` words and a `d` word.
pub fn pets() -> Vec<String> {
    pool(&["cat", "car", "dog"])
}

/// A pool that spells `NASA` two ways: `na|s|a` and `n|a|s|a`.
pub fn space_agencies() -> Vec<String> {
    pool(&[
        "national",
        "aeronautics",
        "space",
        "administration",
        "agency",
        "european",
    ])
}

/// Write `words` one per line to a temp file.
pub fn word_file(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    for word in words {
        writeln!(file, "{}", word).expect("write temp file");
    }
    file.flush().expect("flush temp file");
    file
}

/// Write `contents` verbatim to `name` inside `dir`.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
