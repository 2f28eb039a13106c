use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::NOT_FOUND;

pub const SKILLS_KEYWORD: &str = "skills";
pub const EXPERIENCE_KEYWORD: &str = "experience";

static ALL_CAPS_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z ]+$").unwrap());

/// Collects the lines of the section introduced by `keyword`.
///
/// The section opens at the first line whose lowercase form contains
/// `keyword` (that line is kept) and runs until a blank line or an
/// ALL-CAPS heading, both exclusive. Later lines containing the keyword are
/// kept as section content. Returns `None` when nothing was collected.
pub fn extract_section(text: &str, keyword: &str) -> Option<String> {
    let mut buf = String::new();
    let mut in_section = false;

    for line in text.split('\n') {
        if line.to_lowercase().contains(keyword) {
            in_section = true;
        } else if in_section && (line.trim().is_empty() || ALL_CAPS_HEADING.is_match(line)) {
            break;
        }
        if in_section {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    let section = buf.trim();
    (!section.is_empty()).then(|| section.to_string())
}

/// Skills block, or an empty string when there is none.
pub fn extract_skills(text: &str) -> String {
    extract_section(text, SKILLS_KEYWORD).unwrap_or_default()
}

/// Experience block, or the `"Not found"` sentinel when there is none.
pub fn extract_experience(text: &str) -> String {
    extract_section(text, EXPERIENCE_KEYWORD).unwrap_or_else(|| NOT_FOUND.to_string())
}
