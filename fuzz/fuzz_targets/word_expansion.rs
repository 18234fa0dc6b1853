// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full expansion search.

#![no_main]

use arbitrary::Arbitrary;
use backronym::testing::brute_force_expansions;
use backronym::{find_expansions, Error};
use libfuzzer_sys::fuzz_target;

/// Longest word tried. The search is exponential in word length.
const MAX_FUZZ_CHARS: usize = 10;

#[derive(Debug, Arbitrary)]
struct Input {
    pool: Vec<String>,
    word: String,
}

fuzz_target!(|input: Input| {
    let Input { mut pool, word } = input;
    pool.truncate(64);
    let word: String = word.chars().take(MAX_FUZZ_CHARS).collect();

    match find_expansions(&word, &pool) {
        Ok(found) => {
            // INVARIANT 1: agrees with trying every pattern by hand
            assert_eq!(found, brute_force_expansions(&word, &pool));

            // INVARIANT 2: no empty candidate list is ever reported
            assert!(found.iter().flatten().all(|list| !list.is_empty()));
        }
        // INVARIANT 3: only the empty word is rejected at this length
        Err(Error::InvalidInput { .. }) => assert!(word.is_empty()),
        Err(e) => panic!("unexpected error: {}", e),
    }
});
