//! Text normalization for raw document text.
//!
//! `normalize_text` is the canonical cleanup every field extractor reads from.
//! `clean_lines` does the same cleanup but keeps line structure, for the
//! heuristics that key off line starts and blank lines.

use once_cell::sync::Lazy;
use regex::Regex;

static CONTROL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x00-\x1F\x7F]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static INLINE_WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());

/// Replaces NBSP with a space, strips ASCII control characters (line feeds
/// included), collapses whitespace runs and trims.
///
/// Total over any input and idempotent.
pub fn normalize_text(raw: &str) -> String {
    let text = raw.replace('\u{00A0}', " ");
    let text = CONTROL_CHARS.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Like [`normalize_text`] but keeps line breaks.
///
/// CR/CRLF become LF, NBSP and tabs become spaces, remaining control
/// characters are dropped. Each line is collapsed and trimmed; blank lines are
/// kept as empty lines since they terminate sections.
pub fn clean_lines(raw: &str) -> String {
    let text = raw
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(['\u{00A0}', '\t'], " ");
    let text: String = text
        .chars()
        .filter(|c| *c == '\n' || !c.is_ascii_control())
        .collect();

    text.split('\n')
        .map(|line| INLINE_WHITESPACE_RUN.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}
