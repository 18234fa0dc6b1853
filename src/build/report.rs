// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering expansion results.
//!
//! Markdown is meant for reading: one `## WORD` section per word that can be
//! spelled, one numbered block per expansion, one `- A, B, C` line per part.
//! JSON carries the same content plus the cut pattern and parts.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::WordExpansions;

/// Report encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format '{}' (expected markdown or json)",
                other
            )),
        }
    }
}

/// Render `results` in `format`. Words without expansions are left out.
pub fn render(results: &[WordExpansions], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(results)),
        OutputFormat::Json => render_json(results),
    }
}

/// Markdown report.
///
/// ```text
/// ## CD
///
/// 1.
/// - Car, Cat
/// - Dog
///
/// ```
pub fn render_markdown(results: &[WordExpansions]) -> String {
    let mut out = String::new();
    for word in results.iter().filter(|w| !w.is_empty()) {
        // Writing into a String can't fail
        let _ = writeln!(out, "## {}\n", word.word.to_ascii_uppercase());
        for (n, expansion) in word.expansions.iter().enumerate() {
            if n > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}.", n + 1);
            for candidates in &expansion.candidates {
                let _ = writeln!(out, "- {}", candidates.join(", "));
            }
        }
        out.push('\n');
    }
    out
}

/// Pretty-printed JSON array of the words that have expansions.
pub fn render_json(results: &[WordExpansions]) -> Result<String> {
    let found: Vec<&WordExpansions> = results.iter().filter(|w| !w.is_empty()).collect();
    let mut json = serde_json::to_string_pretty(&found)?;
    json.push('\n');
    Ok(json)
}
