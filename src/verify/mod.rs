// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`SortedKeywords`) that make an unsorted pool
//!    unrepresentable. Prefix lookup bisects, so an unsorted pool silently
//!    loses matches instead of failing loudly.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are violated.
//!    Zero-cost in release, but catch bugs during development.

mod types;
pub mod contracts;

pub use types::*;
