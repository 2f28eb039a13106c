use serde::{Deserialize, Serialize};

/// Structured job description parsed from the line-oriented text file.
///
/// Skill lists keep file order and duplicates. `Default` is the blank
/// description used when the file cannot be read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    pub title: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
}
