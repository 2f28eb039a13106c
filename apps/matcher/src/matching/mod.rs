// Job description parsing and skill matching.
// Data flows one way: JobDescription + resume evidence → FitReport.

pub mod fit_scoring;
pub mod jd_parser;
pub mod synonyms;

pub use fit_scoring::{FitScorer, ResumeEvidence, SynonymFitScorer};
pub use jd_parser::load_job_description_or_blank;
pub use synonyms::SynonymTable;
