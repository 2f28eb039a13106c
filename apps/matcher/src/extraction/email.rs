use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::NOT_FOUND;

// TLD is lowercase-only: "JANE@EXAMPLE.COM" does not match.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-z]{2,}").unwrap());

/// Returns the first email address in `text`, if any.
pub fn find_email(text: &str) -> Option<&str> {
    EMAIL_RE.find(text).map(|m| m.as_str())
}

/// Returns the first email address in `text`, or the `"Not found"` sentinel.
pub fn extract_email(text: &str) -> String {
    find_email(text).unwrap_or(NOT_FOUND).to_string()
}
