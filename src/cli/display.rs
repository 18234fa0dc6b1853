// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the backronym CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `BACKRONYM_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped when `NO_COLOR` is set or the stream isn't a terminal, so piped
//! reports stay plain.
//!
//! Everything here returns `String`s; the caller decides which stream they go to.

use std::sync::OnceLock;

use backronym::build::GenerateSummary;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via BACKRONYM_THEME
    if let Ok(theme) = std::env::var("BACKRONYM_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Which stream the text is headed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Check if colors should be used for `stream` (TTY detection)
pub fn use_colors(stream: Stream) -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    match stream {
        Stream::Stdout => atty::is(atty::Stream::Stdout),
        Stream::Stderr => atty::is(atty::Stream::Stderr),
    }
}

/// Apply theme color with optional modifiers
pub fn themed(enabled: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(enabled: bool, label: &str) -> String {
    let colored_label = themed(enabled, CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!("┌{}{}┐", label_part, "─".repeat(remaining))
}

/// Content line: │ content          │
pub fn row(content: &str) -> String {
    format!("│ {}│", pad_right(content, BOX_WIDTH - 1))
}

/// Section footer: └──────────────────┘
pub fn section_bot() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Highlight the matched (uppercased) prefix of a candidate.
pub fn candidate(enabled: bool, word: &str, matched_chars: usize) -> String {
    if !enabled {
        return word.to_string();
    }
    let split = word
        .char_indices()
        .nth(matched_chars)
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    format!("{}{}{}{}", BOLD, GREEN(), &word[..split], RESET) + &word[split..]
}

/// Color-coded count (gray for zero)
pub fn count(enabled: bool, n: usize) -> String {
    let text = n.to_string();
    if n == 0 {
        themed(enabled, GRAY, &[], &text)
    } else {
        themed(enabled, YELLOW, &[BOLD], &text)
    }
}

/// Color-coded timing value in ms (green=fast, yellow=medium, red=slow)
pub fn timing_ms(enabled: bool, value: f64) -> String {
    let text = format!("{:.1} ms", value);
    let color: fn() -> String = if value < 100.0 {
        GREEN
    } else if value < 1000.0 {
        YELLOW
    } else {
        RED
    };
    themed(enabled, color, &[], &text)
}

/// One-line run summary for stderr.
pub fn summary_line(enabled: bool, summary: &GenerateSummary) -> String {
    let mut line = format!(
        "✅ {} words │ {} spelled │ {} expansions │ {}",
        count(enabled, summary.words_scanned),
        count(enabled, summary.words_matched),
        count(enabled, summary.expansions),
        timing_ms(enabled, summary.elapsed.as_secs_f64() * 1000.0),
    );
    if summary.words_skipped > 0 {
        line.push_str(&format!(" │ {} skipped", count(enabled, summary.words_skipped)));
    }
    line
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
