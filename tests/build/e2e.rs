//! End-to-end tests for the generate workflow.

use std::fs;

use backronym::build::{run_generate, GenerateConfig, OutputFormat};
use backronym::{Error, WordExpansions};
use tempfile::TempDir;

use crate::common::write_fixture;

fn config(dir: &TempDir, keywords: &str, dictionary: &str) -> GenerateConfig {
    GenerateConfig {
        keywords: write_fixture(dir, "keywords.txt", keywords),
        dictionary: write_fixture(dir, "dictionary.txt", dictionary),
        output: Some(dir.path().join("report.md")),
        ..GenerateConfig::default()
    }
}

#[test]
fn test_generate_markdown_e2e() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir, "cat\ncar\ndog\n", "cd\nzebra\ndog\n");

    let summary = run_generate(&config).unwrap();
    assert_eq!(summary.keywords, 3);
    assert_eq!(summary.words_scanned, 3);
    assert_eq!(summary.words_matched, 2);
    assert_eq!(summary.words_skipped, 0);

    let report = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(report.starts_with("## CD\n\n1.\n- Car, Cat\n- Dog\n\n"));
    assert!(report.contains("## DOG\n\n1.\n- DOG\n"));
    assert!(!report.contains("ZEBRA"));
}

#[test]
fn test_generate_json_e2e() {
    let dir = TempDir::new().unwrap();
    let mut config = config(&dir, "national\naeronautics\nspace\nadministration\n", "nasa\n");
    config.format = OutputFormat::Json;
    config.output = Some(dir.path().join("report.json"));

    let summary = run_generate(&config).unwrap();
    assert_eq!(summary.expansions, 2);

    let json = fs::read_to_string(dir.path().join("report.json")).unwrap();
    let parsed: Vec<WordExpansions> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].expansions.len(), 2);
}

#[test]
fn test_sequential_and_parallel_reports_match() {
    let dir = TempDir::new().unwrap();
    let words: String = ["cd", "dc", "cdc", "dog", "cat", "x", "cc", "dd"]
        .iter()
        .map(|w| format!("{}\n", w))
        .collect();

    let mut parallel = config(&dir, "cat\ncar\ndog\nc\nd\n", &words);
    parallel.output = Some(dir.path().join("parallel.md"));
    let mut sequential = parallel.clone();
    sequential.parallel = false;
    sequential.output = Some(dir.path().join("sequential.md"));

    run_generate(&parallel).unwrap();
    run_generate(&sequential).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("parallel.md")).unwrap(),
        fs::read_to_string(dir.path().join("sequential.md")).unwrap()
    );
}

#[test]
fn test_missing_dictionary_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut config = config(&dir, "cat\n", "");
    config.dictionary = dir.path().join("missing.txt");

    assert!(matches!(
        run_generate(&config),
        Err(Error::SourceUnavailable { .. })
    ));
}

#[test]
fn test_empty_dictionary_writes_empty_report() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir, "cat\n", "\n\n");

    let summary = run_generate(&config).unwrap();
    assert_eq!(summary.words_scanned, 0);
    assert_eq!(fs::read_to_string(dir.path().join("report.md")).unwrap(), "");
}
