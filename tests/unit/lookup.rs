//! Tests for prefix lookup.

use backronym::{PrefixIndex, SortedKeywords};

use crate::common::{pets, pool};

#[test]
fn test_lookup_is_case_insensitive() {
    let index = PrefixIndex::new(pets());
    assert_eq!(index.lookup("ca"), vec!["CAr", "CAt"]);
    assert_eq!(index.lookup("Ca"), vec!["CAr", "CAt"]);
    assert_eq!(index.lookup("CA"), vec!["CAr", "CAt"]);
}

#[test]
fn test_capitalizes_only_the_prefix() {
    let index = PrefixIndex::new(pool(&["database", "Dog"]));
    assert_eq!(index.lookup("data"), vec!["DATAbase"]);
    assert_eq!(index.lookup("d"), vec!["Database", "Dog"]);
}

#[test]
fn test_prefix_equal_to_keyword_matches() {
    let index = PrefixIndex::new(pets());
    assert_eq!(index.lookup("dog"), vec!["DOG"]);
}

#[test]
fn test_prefix_longer_than_every_keyword() {
    let index = PrefixIndex::new(pool(&["a", "ab", "abc"]));
    assert!(index.lookup("abcd").is_empty());
    assert_eq!(index.count("abcd"), 0);
}

#[test]
fn test_no_match_between_keywords() {
    let index = PrefixIndex::new(pets());
    assert!(index.lookup("cb").is_empty());
    assert!(index.lookup("e").is_empty());
    assert!(index.lookup("a").is_empty());
}

#[test]
fn test_empty_pool() {
    let index = PrefixIndex::new(Vec::new());
    assert!(index.is_empty());
    assert!(index.lookup("a").is_empty());
}

#[test]
fn test_range_and_count_agree_with_lookup() {
    let index = PrefixIndex::new(pool(&["b", "ba", "bb", "c", "a"]));
    assert_eq!(index.range("b"), 1..4);
    assert_eq!(index.count("b"), index.lookup("b").len());
    assert!(index.contains_prefix("bb"));
    assert!(!index.contains_prefix("bc"));
}

#[test]
fn test_duplicates_are_kept() {
    let index = PrefixIndex::new(pool(&["cat", "cat"]));
    assert_eq!(index.lookup("c"), vec!["Cat", "Cat"]);
}

#[test]
fn test_from_sorted_rejects_unsorted_pool() {
    assert!(PrefixIndex::from_sorted(pool(&["b", "a"])).is_err());
    assert!(PrefixIndex::from_sorted(pool(&["a", "B", "c"])).is_ok());
}

#[test]
fn test_sorted_keywords_feed_the_index() {
    let keywords: SortedKeywords = pool(&["dog", "cat"]).into_iter().collect();
    let index = PrefixIndex::from_keywords(keywords);
    assert_eq!(index.keywords().as_slice(), &["cat", "dog"]);
}
