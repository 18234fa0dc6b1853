// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for word list parsing.

#![no_main]

use backronym::build::parse_word_list;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limit = data.first().map(|&b| b as usize).unwrap_or(0);

    // Invalid UTF-8 is an io error, never a panic
    let Ok(words) = parse_word_list(data, limit) else {
        return;
    };

    for word in &words {
        assert!(!word.is_empty());
        assert_eq!(word.trim(), word);
        assert!(word.chars().count() <= limit);
    }
});
