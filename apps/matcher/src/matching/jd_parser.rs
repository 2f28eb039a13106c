//! JD Parser — reads the structured job description text into a `JobDescription`.
//!
//! Expected shape:
//!
//! ```text
//! Job Title: Backend Engineer
//! Company: Acme
//! Location: Remote
//! Required Skills:
//! 1. Python
//! 2. Git
//! Preferred Skills:
//! 1. Docker
//! ```

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::errors::MatchError;
use crate::models::JobDescription;

static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq)]
enum SkillList {
    None,
    Required,
    Preferred,
}

/// Parses job description lines.
///
/// - `job title:` / `company:` / `location:` prefixes (case-insensitive) set
///   the field; a later line overwrites an earlier one.
/// - A line containing `required skills:` or `preferred skills:` switches the
///   active list.
/// - Inside a list, `N. text` lines are appended; any other line is ignored.
pub fn parse_job_description<I, S>(lines: I) -> JobDescription
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut jd = JobDescription::default();
    let mut active = SkillList::None;

    for line in lines {
        let line = line.as_ref().trim();
        let lower = line.to_lowercase();

        if lower.starts_with("job title:") {
            jd.title = value_after_colon(line);
        } else if lower.starts_with("company:") {
            jd.company = value_after_colon(line);
        } else if lower.starts_with("location:") {
            jd.location = value_after_colon(line);
        } else if lower.contains("required skills:") {
            active = SkillList::Required;
        } else if lower.contains("preferred skills:") {
            active = SkillList::Preferred;
        } else if let Some(item) = numbered_item(line) {
            match active {
                SkillList::Required => jd.required_skills.push(item),
                SkillList::Preferred => jd.preferred_skills.push(item),
                SkillList::None => {}
            }
        }
    }

    debug!(
        "Parsed JD '{}': {} required, {} preferred skills",
        jd.title,
        jd.required_skills.len(),
        jd.preferred_skills.len()
    );
    jd
}

/// Reads and parses the job description file. Invalid UTF-8 is replaced
/// rather than rejected, same as plain-text resumes.
pub fn load_job_description(path: &Path) -> Result<JobDescription, MatchError> {
    let bytes = std::fs::read(path).map_err(|e| MatchError::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_job_description(text.lines()))
}

/// Like [`load_job_description`] but degrades to a blank description.
pub fn load_job_description_or_blank(path: &Path) -> JobDescription {
    load_job_description(path).unwrap_or_else(|e| {
        warn!("Job description unavailable, scoring against an empty one: {e}");
        JobDescription::default()
    })
}

fn value_after_colon(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

fn numbered_item(line: &str) -> Option<String> {
    NUMBERED_ITEM
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}
