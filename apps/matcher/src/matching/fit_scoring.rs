//! Fit Scoring — matches resume skills against the job description's skill lists.
//!
//! Default: `SynonymFitScorer` (substring match through the synonym table).
//!
//! A job skill counts as matched when any of its variants is a substring of a
//! resume skill token or of the lowercased resume text. Missing skills are the
//! job skills not present in the matched list by exact string equality, so
//! the two lists always partition the job list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::synonyms::SynonymTable;
use crate::models::JobDescription;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub required: f64,
    pub preferred: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            required: 0.75,
            preferred: 0.25,
        }
    }
}

/// What the resume is scored on.
#[derive(Debug, Clone, Copy)]
pub struct ResumeEvidence<'a> {
    pub skills: &'a [String],
    /// Lowercased normalized resume text.
    pub text_lower: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub matched_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub missing_required: Vec<String>,
    pub missing_preferred: Vec<String>,
    pub required_pct: f64,
    pub preferred_pct: f64,
    pub weighted_score: f64,
    /// `weighted_score` truncated toward zero.
    pub score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait FitScorer {
    fn score(&self, resume: &ResumeEvidence<'_>, jd: &JobDescription) -> FitReport;
}

// ────────────────────────────────────────────────────────────────────────────
// SynonymFitScorer
// ────────────────────────────────────────────────────────────────────────────

pub struct SynonymFitScorer {
    synonyms: SynonymTable,
    weights: MatchWeights,
}

impl SynonymFitScorer {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self {
            synonyms,
            weights: MatchWeights::default(),
        }
    }
}

impl FitScorer for SynonymFitScorer {
    fn score(&self, resume: &ResumeEvidence<'_>, jd: &JobDescription) -> FitReport {
        let matched_required = find_skill_matches(resume, &jd.required_skills, &self.synonyms);
        let matched_preferred = find_skill_matches(resume, &jd.preferred_skills, &self.synonyms);

        let required_pct = match_percentage(matched_required.len(), jd.required_skills.len());
        let preferred_pct = match_percentage(matched_preferred.len(), jd.preferred_skills.len());
        let weighted_score = compute_weighted_score(required_pct, preferred_pct, &self.weights);

        debug!(
            "Matched {}/{} required, {}/{} preferred → {:.2}",
            matched_required.len(),
            jd.required_skills.len(),
            matched_preferred.len(),
            jd.preferred_skills.len(),
            weighted_score
        );

        FitReport {
            missing_required: find_missing_skills(&jd.required_skills, &matched_required),
            missing_preferred: find_missing_skills(&jd.preferred_skills, &matched_preferred),
            matched_required,
            matched_preferred,
            required_pct,
            preferred_pct,
            weighted_score,
            score: weighted_score as u32,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core matching
// ────────────────────────────────────────────────────────────────────────────

/// Job skills (original spelling, original order) that the resume covers.
pub fn find_skill_matches(
    resume: &ResumeEvidence<'_>,
    job_skills: &[String],
    synonyms: &SynonymTable,
) -> Vec<String> {
    job_skills
        .iter()
        .filter(|job_skill| {
            synonyms.variants(job_skill).iter().any(|variant| {
                resume.skills.iter().any(|s| s.contains(variant.as_str()))
                    || resume.text_lower.contains(variant.as_str())
            })
        })
        .cloned()
        .collect()
}

/// `all` minus `matched`, by exact string equality, order preserved.
pub fn find_missing_skills(all: &[String], matched: &[String]) -> Vec<String> {
    all.iter()
        .filter(|skill| !matched.contains(skill))
        .cloned()
        .collect()
}

/// Percentage in [0, 100]; 0 for an empty job list.
pub fn match_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64 * 100.0
}

pub fn compute_weighted_score(required_pct: f64, preferred_pct: f64, weights: &MatchWeights) -> f64 {
    required_pct * weights.required + preferred_pct * weights.preferred
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
