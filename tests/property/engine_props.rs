//! Properties of the full expansion search.

use backronym::{find_expansions, Engine, PrefixIndex};
use proptest::prelude::*;

use crate::common::brute_force_expansions;

fn pool_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[abcd]{1,4}").unwrap(), 0..15)
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcd]{1,7}").unwrap()
}

proptest! {
    #[test]
    fn prop_engine_matches_oracle(pool in pool_strategy(), word in word_strategy()) {
        prop_assert_eq!(
            find_expansions(&word, &pool).unwrap(),
            brute_force_expansions(&word, &pool)
        );
    }

    /// An expansion is reported iff every part of its partition has a match.
    #[test]
    fn prop_reported_iff_every_part_matches(pool in pool_strategy(), word in word_strategy()) {
        let engine = Engine::new(pool.clone());
        let index = PrefixIndex::new(pool);
        let found = engine.expansions(&word).unwrap();
        let reported: Vec<u64> = found.expansions.iter().map(|e| e.pattern.get()).collect();

        let expected: Vec<u64> = backronym::compositions(&word)
            .unwrap()
            .with_patterns()
            .filter(|(_, parts)| parts.iter().all(|p| index.contains_prefix(p)))
            .map(|(p, _)| p.get())
            .collect();
        prop_assert_eq!(reported, expected);
    }

    #[test]
    fn prop_candidate_lists_align_with_parts(pool in pool_strategy(), word in word_strategy()) {
        let found = Engine::new(pool).expansions(&word).unwrap();
        for expansion in &found.expansions {
            prop_assert_eq!(expansion.parts.len(), expansion.candidates.len());
            prop_assert!(expansion.candidates.iter().all(|c| !c.is_empty()));
        }
    }

    #[test]
    fn prop_count_matches_expansions(pool in pool_strategy(), word in word_strategy()) {
        let engine = Engine::new(pool);
        prop_assert_eq!(
            engine.count_expansions(&word).unwrap(),
            engine.expansions(&word).unwrap().expansions.len()
        );
    }

    #[test]
    fn prop_search_is_idempotent(pool in pool_strategy(), word in word_strategy()) {
        prop_assert_eq!(
            find_expansions(&word, &pool).unwrap(),
            find_expansions(&word, &pool).unwrap()
        );
    }
}
