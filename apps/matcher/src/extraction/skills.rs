//! Splits a free-text skills block into normalized skill tokens.

use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•-]\s*").unwrap());
// Lazy: strips up to the first colon only.
static LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*?:").unwrap());
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;/]\s*|\s+and\s+|\s+").unwrap());
static JS_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\.?js$").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lowercases, drops a trailing `.js`/`js` that follows a word boundary and
/// collapses whitespace.
///
/// `"Node.js"` → `"node"`, `"React.JS"` → `"react"`, `"ReactJS"` → `"reactjs"`.
pub fn normalize_skill(skill: &str) -> String {
    let lower = skill.to_lowercase();
    let stripped = JS_SUFFIX_RE.replace(&lower, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Tokenizes a skills block, preserving order and duplicates.
pub fn tokenize_skills(section: &str) -> Vec<String> {
    section
        .split('\n')
        .flat_map(|line| {
            let line = BULLET_RE.replace(line, "");
            let line = LABEL_RE.replace(&line, "");
            let line = line.trim().to_string();
            SEPARATOR_RE
                .split(&line)
                .filter(|token| !token.is_empty())
                .map(normalize_skill)
                .filter(|token| !token.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}
