use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the collaborators around the matching core.
///
/// None of these abort a run: the pipeline logs them and falls back to the
/// degraded value (empty resume text, blank job description, built-in synonyms).
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF extraction failed for {path}: {message}")]
    PdfExtraction { path: PathBuf, message: String },

    #[error("Unsupported document type: {0}")]
    UnsupportedDocument(PathBuf),

    #[error("Invalid synonyms file {path}: {source}")]
    Synonyms {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl MatchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MatchError::Io {
            path: path.into(),
            source,
        }
    }
}
