//! Tests for word partitioning.

use backronym::{
    compositions, pattern_count, split, validate_word, CutPattern, Error, InputProblem,
    MAX_WORD_CHARS,
};

#[test]
fn test_three_letters_in_pattern_order() {
    let all: Vec<_> = compositions("abc").unwrap().collect();
    assert_eq!(
        all,
        vec![
            vec!["abc"],
            vec!["a", "bc"],
            vec!["ab", "c"],
            vec!["a", "b", "c"],
        ]
    );
}

#[test]
fn test_patterns_reported_alongside_parts() {
    let patterns: Vec<u64> = compositions("abcd")
        .unwrap()
        .with_patterns()
        .map(|(p, _)| p.get())
        .collect();
    assert_eq!(patterns, (0..8).collect::<Vec<_>>());
}

#[test]
fn test_whole_and_all_cuts() {
    assert_eq!(split("word", CutPattern::WHOLE), vec!["word"]);
    assert_eq!(
        split("word", CutPattern::all_cuts(4)),
        vec!["w", "o", "r", "d"]
    );
}

#[test]
fn test_size_hint_is_exact() {
    let iter = compositions("abcdef").unwrap();
    assert_eq!(iter.size_hint(), (32, Some(32)));
    assert_eq!(iter.count(), 32);
}

#[test]
fn test_longest_accepted_word() {
    let word = "a".repeat(MAX_WORD_CHARS);
    assert_eq!(validate_word(&word).unwrap(), MAX_WORD_CHARS);
    assert_eq!(pattern_count(MAX_WORD_CHARS), 1u64 << 63);
}

#[test]
fn test_too_long_word_is_rejected() {
    let word = "a".repeat(MAX_WORD_CHARS + 1);
    match compositions(&word) {
        Err(Error::InvalidInput {
            reason: InputProblem::TooLong { chars, max },
            ..
        }) => {
            assert_eq!(chars, MAX_WORD_CHARS + 1);
            assert_eq!(max, MAX_WORD_CHARS);
        }
        other => panic!("expected TooLong, got {:?}", other.map(|c| c.count())),
    }
}

#[test]
fn test_empty_word_is_rejected() {
    let err = validate_word("").unwrap_err();
    assert!(err.is_per_word());
}

#[test]
fn test_length_counts_characters_not_bytes() {
    // 64 two-byte characters: 128 bytes, still accepted
    let word = "é".repeat(MAX_WORD_CHARS);
    assert!(validate_word(&word).is_ok());
}
