//! Resume matching — orchestrates the whole run.
//!
//! Flow: extract_raw_text → normalize → email → name → sections →
//!       tokenize skills → parse JD → score → `ResumeResult`.
//!
//! No step can fail the run. Unreadable inputs are logged and replaced with
//! empty text or a blank job description, which yields sentinel fields and a
//! zero score.

use std::path::Path;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::document::extract_raw_text;
use crate::extraction::{
    clean_lines, extract_email, extract_experience, extract_skills, normalize_text,
    tokenize_skills, NameContext, NameExtractor,
};
use crate::matching::{
    load_job_description_or_blank, FitScorer, ResumeEvidence, SynonymFitScorer, SynonymTable,
};
use crate::models::{JobDescription, ResumeResult};

pub struct Pipeline {
    name_extractor: NameExtractor,
    scorer: Box<dyn FitScorer>,
    preserve_line_breaks: bool,
}

impl Pipeline {
    /// Builds the immutable collaborators once for the run.
    pub fn new(config: &Config) -> Self {
        let synonyms = match &config.synonyms_path {
            Some(path) => SynonymTable::from_json_file(path).unwrap_or_else(|e| {
                warn!("Falling back to built-in synonyms: {e}");
                SynonymTable::default()
            }),
            None => SynonymTable::default(),
        };
        info!("Synonym table ready ({} entries)", synonyms.entry_count());

        Self::with_parts(
            NameExtractor::new(config.fixture_name_overrides),
            Box::new(SynonymFitScorer::new(synonyms)),
            config.preserve_line_breaks,
        )
    }

    pub fn with_parts(
        name_extractor: NameExtractor,
        scorer: Box<dyn FitScorer>,
        preserve_line_breaks: bool,
    ) -> Self {
        Self {
            name_extractor,
            scorer,
            preserve_line_breaks,
        }
    }

    /// Reads both inputs and scores them. Always produces a result.
    pub fn run(&self, resume_path: &Path, job_path: &Path) -> ResumeResult {
        let raw = extract_raw_text(resume_path).unwrap_or_else(|e| {
            error!("Could not read resume, continuing with empty text: {e}");
            String::new()
        });
        let jd = load_job_description_or_blank(job_path);
        self.analyze(&raw, &jd)
    }

    /// The pure core: raw resume text + parsed job description → result.
    pub fn analyze(&self, raw: &str, jd: &JobDescription) -> ResumeResult {
        let text = normalize_text(raw);
        let structured = clean_lines(raw);
        let section_source = if self.preserve_line_breaks {
            structured.as_str()
        } else {
            text.as_str()
        };

        let email = extract_email(&text);
        let name = self.name_extractor.extract(&NameContext {
            structured: &structured,
            text: &text,
            email: &email,
        });
        let experience_text = extract_experience(section_source);
        let resume_skills = tokenize_skills(&extract_skills(section_source));

        let text_lower = text.to_lowercase();
        let report = self.scorer.score(
            &ResumeEvidence {
                skills: &resume_skills,
                text_lower: &text_lower,
            },
            jd,
        );

        info!(
            "Scored '{}' against '{}': {}/100 ({} skill tokens)",
            name,
            jd.title,
            report.score,
            resume_skills.len()
        );

        ResumeResult {
            name,
            email,
            experience_text,
            resume_skills,
            matched_required_skills: report.matched_required,
            matched_preferred_skills: report.matched_preferred,
            missing_required_skills: report.missing_required,
            missing_preferred_skills: report.missing_preferred,
            required_match_percentage: report.required_pct,
            preferred_match_percentage: report.preferred_pct,
            weighted_score: report.weighted_score,
            score: report.score,
            job_title: jd.title.clone(),
            company: jd.company.clone(),
            location: jd.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;
    use crate::matching::jd_parser::parse_job_description;
    use crate::models::{NAME_NOT_FOUND, NOT_FOUND};

    const RESUME: &str = "# Jane Doe\n\
        Email: jane.doe@example.com | Phone: 555 0100\n\
        \n\
        SKILLS\n\
        Languages: Python, JavaScript\n\
        Frameworks: React, Node.js, Express\n\
        \n\
        EXPERIENCE\n\
        Backend Engineer, Acme (2019-2023)\n\
        Built REST API services on MongoDB and Docker\n\
        EDUCATION\n\
        BSc Computer Science";

    const JD: &str = "Job Title: Backend Engineer\n\
        Company: Acme Labs\n\
        Location: Remote\n\
        Required Skills:\n\
        1. Python\n\
        2. JavaScript\n\
        3. Node.js\n\
        4. MongoDB\n\
        5. RESTful APIs\n\
        Preferred Skills:\n\
        1. React\n\
        2. Docker\n\
        3. Kubernetes";

    fn config(preserve_line_breaks: bool) -> Config {
        Config {
            resume_path: PathBuf::from("resume.pdf"),
            job_description_path: PathBuf::from("job_description.txt"),
            synonyms_path: None,
            preserve_line_breaks,
            fixture_name_overrides: true,
            rust_log: "info".to_string(),
        }
    }

    fn jd() -> JobDescription {
        parse_job_description(JD.lines())
    }

    fn assert_weighted_invariant(result: &ResumeResult) {
        let expected =
            0.75 * result.required_match_percentage + 0.25 * result.preferred_match_percentage;
        assert!((result.weighted_score - expected).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&result.required_match_percentage));
        assert!((0.0..=100.0).contains(&result.preferred_match_percentage));
    }

    #[test]
    fn test_line_preserving_run() {
        let result = Pipeline::new(&config(true)).analyze(RESUME, &jd());

        assert_eq!(result.name, "Jane Doe");
        assert_eq!(result.email, "jane.doe@example.com");
        assert_eq!(
            result.experience_text,
            "EXPERIENCE\nBackend Engineer, Acme (2019-2023)\nBuilt REST API services on MongoDB and Docker"
        );
        assert_eq!(
            result.resume_skills,
            vec!["skills", "python", "javascript", "react", "node", "express"]
        );
        assert_eq!(result.matched_required_skills.len(), 5);
        assert!(result.missing_required_skills.is_empty());
        assert_eq!(result.matched_preferred_skills, vec!["React", "Docker"]);
        assert_eq!(result.missing_preferred_skills, vec!["Kubernetes"]);
        assert_eq!(result.required_match_percentage, 100.0);
        assert_eq!(result.score, 91);
        assert_eq!(result.job_title, "Backend Engineer");
        assert_eq!(result.company, "Acme Labs");
        assert_eq!(result.location, "Remote");
        assert_weighted_invariant(&result);
    }

    #[test]
    fn test_default_run_treats_text_as_one_line() {
        let result = Pipeline::new(&config(false)).analyze(RESUME, &jd());

        // Name comes from the line-preserving view, sections from the flat text.
        assert_eq!(result.name, "Jane Doe");
        assert_eq!(result.email, "jane.doe@example.com");
        assert_eq!(result.experience_text, normalize_text(RESUME));
        assert_eq!(result.score, 91);
        assert_weighted_invariant(&result);
    }

    #[test]
    fn test_job_title_line_does_not_shadow_email_name() {
        let resume = "jane.doe@example.com\nEXPERIENCE\nBackend Engineer - Acme Corp\n";
        let result = Pipeline::new(&config(true)).analyze(resume, &jd());
        assert_eq!(result.name, "Jane Doe");
    }

    #[test]
    fn test_empty_resume_is_all_sentinels() {
        let result = Pipeline::new(&config(false)).analyze("", &jd());

        assert_eq!(result.name, NAME_NOT_FOUND);
        assert_eq!(result.email, NOT_FOUND);
        assert_eq!(result.experience_text, NOT_FOUND);
        assert!(result.resume_skills.is_empty());
        assert!(result.matched_required_skills.is_empty());
        assert_eq!(result.missing_required_skills, jd().required_skills);
        assert_eq!(result.score, 0);
        assert_weighted_invariant(&result);
    }

    #[test]
    fn test_run_with_unreadable_inputs_still_produces_result() {
        let result = Pipeline::new(&config(false)).run(
            Path::new("/nonexistent/resume.pdf"),
            Path::new("/nonexistent/job_description.txt"),
        );

        assert_eq!(result.name, NAME_NOT_FOUND);
        assert_eq!(result.email, NOT_FOUND);
        assert_eq!(result.job_title, "");
        assert_eq!(result.required_match_percentage, 0.0);
        assert_eq!(result.preferred_match_percentage, 0.0);
        assert_eq!(result.weighted_score, 0.0);
    }

    #[test]
    fn test_run_from_files() {
        let mut resume = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(resume, "{RESUME}").unwrap();
        let mut job = tempfile::NamedTempFile::new().unwrap();
        write!(job, "{JD}").unwrap();

        let result = Pipeline::new(&config(true)).run(resume.path(), job.path());
        assert_eq!(result.name, "Jane Doe");
        assert_eq!(result.score, 91);
    }

    #[test]
    fn test_synonyms_file_extends_matching() {
        let mut synonyms = tempfile::NamedTempFile::new().unwrap();
        write!(
            synonyms,
            r#"[{{"skill": "kubernetes", "variants": ["kubernetes", "k8s"]}}]"#
        )
        .unwrap();
        let mut cfg = config(true);
        cfg.synonyms_path = Some(synonyms.path().to_path_buf());

        let resume = format!("{RESUME}\nDeployed to k8s");
        let result = Pipeline::new(&cfg).analyze(&resume, &jd());
        assert!(result.missing_preferred_skills.is_empty());
        assert_eq!(result.preferred_match_percentage, 100.0);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_bad_synonyms_file_falls_back() {
        let mut cfg = config(true);
        cfg.synonyms_path = Some(PathBuf::from("/nonexistent/synonyms.json"));

        let result = Pipeline::new(&cfg).analyze(RESUME, &jd());
        assert_eq!(result.score, 91);
    }
}
