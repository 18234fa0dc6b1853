//! Properties of word partitioning.

use std::collections::HashSet;

use backronym::{compositions, pattern_count, split, CutPattern};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zé]{1,10}").unwrap()
}

proptest! {
    /// Every composition concatenates back to the word, with no empty part.
    #[test]
    fn prop_parts_cover_the_word(word in word_strategy()) {
        for parts in compositions(&word).unwrap() {
            prop_assert_eq!(parts.concat(), word.clone());
            prop_assert!(parts.iter().all(|p| !p.is_empty()));
        }
    }

    /// A word of L characters has exactly 2^(L-1) compositions, all distinct.
    #[test]
    fn prop_compositions_are_exhaustive_and_distinct(word in word_strategy()) {
        let chars = word.chars().count();
        let all: Vec<Vec<String>> = compositions(&word).unwrap().collect();
        prop_assert_eq!(all.len() as u64, pattern_count(chars));

        let distinct: HashSet<&Vec<String>> = all.iter().collect();
        prop_assert_eq!(distinct.len(), all.len());
    }

    /// The number of parts is one more than the number of cuts inside the word.
    #[test]
    fn prop_part_count_matches_pattern(word in word_strategy(), bits in any::<u64>()) {
        let chars = word.chars().count();
        let pattern = CutPattern(bits);
        prop_assert_eq!(split(&word, pattern).len(), pattern.part_count(chars));
    }

    /// Patterns come out in strictly increasing order.
    #[test]
    fn prop_patterns_increase(word in word_strategy()) {
        let patterns: Vec<u64> = compositions(&word)
            .unwrap()
            .with_patterns()
            .map(|(p, _)| p.get())
            .collect();
        prop_assert!(patterns.windows(2).all(|w| w[0] < w[1]));
    }
}
