// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spell words with the prefixes of your keywords.
//!
//! Given a target word and a keyword pool, find every way to cut the word into
//! consecutive pieces such that each piece starts (case-insensitively) at least
//! one keyword, and list the keywords each piece reaches. `NASA` over a pool of
//! space words might come back as `NAtional / Aeronautics / Space /
//! Administration`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  engine.rs   │────▶│ partition.rs │     │  expand.rs   │────▶│   index.rs   │
//! │  (Engine,    │     │ (cut pattern │     │ (one cut →   │     │ (PrefixIndex │
//! │  find_       │────────────────────────▶│  candidate   │     │  bisection)  │
//! │  expansions) │     │  → parts)    │     │  lists)      │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                                              │
//!        ▼                                                              ▼
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                                 verify/                                     │
//! │          (SortedKeywords, debug contracts on partitions and lookups)        │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `build/` wraps the core in a batch pipeline (word list loading, parallel
//! expansion, markdown/JSON reports).
//!
//! # Usage
//!
//! ```
//! use backronym::{find_expansions, Engine};
//!
//! let pool: Vec<String> = ["cat", "car", "dog"].iter().map(|s| s.to_string()).collect();
//!
//! // One-shot
//! let found = find_expansions("cd", &pool).unwrap();
//! assert_eq!(found, vec![vec![vec!["Car", "Cat"], vec!["Dog"]]]);
//!
//! // Reusing one index across words
//! let engine = Engine::new(pool);
//! let dog = engine.expansions("do").unwrap();
//! assert_eq!(dog.expansions[0].candidates, vec![vec!["DOg"]]);
//! ```

// Module declarations
pub mod build;
mod engine;
mod error;
mod expand;
mod index;
mod partition;
mod types;
mod utils;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use engine::{find_expansions, Engine};
pub use error::{Error, InputProblem, Result};
pub use expand::{expand, is_expandable, NoExpansion};
pub use index::PrefixIndex;
pub use partition::{compositions, split, validate_word, Compositions, WithPatterns, MAX_WORD_CHARS};
pub use types::{
    pattern_count, CandidateList, CutPattern, Expansion, Partition, ResultSet, WordExpansions,
};
pub use utils::{capitalize_prefix, fold};
pub use verify::{InvariantError, SortedKeywords};
