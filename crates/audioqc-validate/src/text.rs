//! Text canonicalization for metadata comparisons.
//!
//! Spreadsheet exports and METS documents disagree on incidental
//! punctuation: curly versus straight quotes, stray hyphens, ampersands
//! spelled out or not. Values are normalized on both sides before any
//! textual comparison so those differences never count as mismatches.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// Normalize free text for comparison. `None` yields the empty string.
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let text = text.replace('\n', " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = text
        .replace(['\u{201C}', '\u{201D}', '"'], "")
        .replace('\'', "")
        .replace('-', "")
        .replace(';', "")
        .replace('\u{2026}', "")
        .replace('&', "and");

    text.trim().to_string()
}
