//! Tests for the expansion engine.

use backronym::{find_expansions, CutPattern, Engine, Error};

use crate::common::{pets, pool, space_agencies};

#[test]
fn test_find_expansions_documented_example() {
    let found = find_expansions("cd", &pets()).unwrap();
    assert_eq!(found, vec![vec![vec!["Car", "Cat"], vec!["Dog"]]]);
}

#[test]
fn test_single_character_word() {
    let found = find_expansions("a", &pool(&["ab"])).unwrap();
    assert_eq!(found, vec![vec![vec!["Ab"]]]);
}

#[test]
fn test_empty_pool_finds_nothing() {
    assert!(find_expansions("abc", &[]).unwrap().is_empty());
}

#[test]
fn test_unspellable_word_finds_nothing() {
    assert!(find_expansions("xyz", &pets()).unwrap().is_empty());
}

#[test]
fn test_empty_word_is_an_error() {
    assert!(matches!(
        find_expansions("", &pets()),
        Err(Error::InvalidInput { .. })
    ));
}

#[test]
fn test_expansions_follow_pattern_order() {
    let engine = Engine::new(pool(&["a", "ab", "b"]));
    let found = engine.expansions("ab").unwrap();
    let patterns: Vec<CutPattern> = found.expansions.iter().map(|e| e.pattern).collect();
    assert_eq!(patterns, vec![CutPattern(0), CutPattern(1)]);
    assert_eq!(found.expansions[0].candidates, vec![vec!["AB"]]);
    assert_eq!(found.expansions[1].candidates, vec![vec!["A", "Ab"], vec!["B"]]);
}

#[test]
fn test_nasa_spelled_two_ways() {
    let engine = Engine::new(space_agencies());
    let found = engine.expansions("nasa").unwrap();
    let parts: Vec<_> = found.expansions.iter().map(|e| e.parts.clone()).collect();
    assert_eq!(parts, vec![vec!["na", "s", "a"], vec!["n", "a", "s", "a"]]);
    assert_eq!(found.expansions[0].candidates[0], vec!["NAtional"]);
    assert_eq!(engine.count_expansions("nasa").unwrap(), 2);
}

#[test]
fn test_esa_combinations() {
    let engine = Engine::new(space_agencies());
    let found = engine.expansions("esa").unwrap();
    // e | s | a, with three `a` keywords
    assert_eq!(found.expansions.len(), 1);
    assert_eq!(found.expansions[0].combinations(), 3);
}

#[test]
fn test_batch_keeps_input_order() {
    let engine = Engine::new(pets());
    let words = ["dog", "", "cd", "zzz", "c"];
    let batch = engine.expand_batch(&words);

    assert_eq!(batch.len(), words.len());
    assert!(batch[1].is_err());
    for (word, outcome) in words.iter().zip(&batch) {
        if let Ok(found) = outcome {
            assert_eq!(found.word, *word);
        }
    }
    assert!(batch[3].as_ref().unwrap().is_empty());
}

#[test]
fn test_batch_matches_sequential() {
    let engine = Engine::new(space_agencies());
    let words: Vec<String> = ["nasa", "esa", "sea", "an", "a"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let parallel = engine.expand_batch(&words);
    let sequential = engine.expand_batch_sequential(&words);
    for (p, s) in parallel.into_iter().zip(sequential) {
        assert_eq!(p.unwrap(), s.unwrap());
    }
}

#[test]
fn test_engine_is_reusable() {
    let engine = Engine::new(pets());
    let first = engine.expansions("cd").unwrap();
    let second = engine.expansions("cd").unwrap();
    assert_eq!(first, second);
}
