//! Raw text extraction from resume documents.
//!
//! The extractor is picked by file extension. Failures are returned to the
//! caller, which decides how to degrade.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use crate::errors::MatchError;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String, MatchError>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String, MatchError> {
        let bytes = std::fs::read(path).map_err(|e| MatchError::io(path, e))?;
        // pdf-extract panics on some malformed files instead of returning an error.
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(&bytes)));
        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(MatchError::PdfExtraction {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => Err(MatchError::PdfExtraction {
                path: path.to_path_buf(),
                message: "decoder panicked on malformed input".to_string(),
            }),
        }
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, MatchError> {
        let bytes = std::fs::read(path).map_err(|e| MatchError::io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Selects an extractor from the lowercased file extension.
pub fn extractor_for(path: &Path) -> Result<Box<dyn TextExtractor>, MatchError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => Ok(Box::new(PdfExtractor)),
        Some("txt" | "text" | "md") => Ok(Box::new(PlainTextExtractor)),
        _ => Err(MatchError::UnsupportedDocument(path.to_path_buf())),
    }
}

pub fn extract_raw_text(path: &Path) -> Result<String, MatchError> {
    let text = extractor_for(path)?.extract(path)?;
    debug!("Extracted {} chars from {}", text.len(), path.display());
    Ok(text)
}
