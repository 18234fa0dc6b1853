// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for prefix lookup.
//!
//! Arbitrary pools and prefixes, including multi-byte text and prefixes longer
//! than every keyword. The bisection must agree with a linear scan.

#![no_main]

use arbitrary::Arbitrary;
use backronym::testing::brute_force_lookup;
use backronym::PrefixIndex;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    pool: Vec<String>,
    prefix: String,
}

fuzz_target!(|input: Input| {
    let Input { mut pool, prefix } = input;
    pool.truncate(256);

    let index = PrefixIndex::new(pool.clone());
    let found = index.lookup(&prefix);

    // INVARIANT 1: same keywords, same order, as a linear scan
    assert_eq!(found, brute_force_lookup(&prefix, &pool));

    // INVARIANT 2: range and lookup agree
    assert_eq!(index.count(&prefix), found.len());
});
