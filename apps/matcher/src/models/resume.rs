use serde::{Deserialize, Serialize};

/// Sentinel for an email or experience section that could not be found.
pub const NOT_FOUND: &str = "Not found";

/// Sentinel for a name that no extraction strategy could resolve.
pub const NAME_NOT_FOUND: &str = "Not found (please edit)";

/// The single record produced per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeResult {
    pub name: String,
    pub email: String,
    pub experience_text: String,
    /// Normalized skill tokens taken from the resume's skills section.
    pub resume_skills: Vec<String>,
    pub matched_required_skills: Vec<String>,
    pub matched_preferred_skills: Vec<String>,
    pub missing_required_skills: Vec<String>,
    pub missing_preferred_skills: Vec<String>,
    pub required_match_percentage: f64,
    pub preferred_match_percentage: f64,
    /// 0.75 * required + 0.25 * preferred
    pub weighted_score: f64,
    /// `weighted_score` truncated toward zero.
    pub score: u32,
    pub job_title: String,
    pub company: String,
    pub location: String,
}
