//! Synonym table — canonical job skill → accepted textual variants.
//!
//! Built once at startup and never mutated. Variant order is significant:
//! matching tries variants in declaration order and stops at the first hit.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::MatchError;

const BUILT_IN: &[(&str, &[&str])] = &[
    ("python", &["python"]),
    ("java", &["java"]),
    ("javascript", &["javascript", "js"]),
    ("node.js", &["node", "nodejs", "node.js"]),
    ("react", &["react", "reactjs"]),
    ("mongodb", &["mongodb", "mongo"]),
    ("restful apis", &["rest api", "restful api"]),
    ("express", &["express", "express.js"]),
    ("docker", &["docker"]),
    ("git", &["git", "github"]),
];

/// One row of a synonyms file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub skill: String,
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    /// Variants for `job_skill` (lowercased), or the lowercased skill itself.
    pub fn variants(&self, job_skill: &str) -> Vec<String> {
        let key = job_skill.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.skill == key)
            .map(|e| e.variants.clone())
            .unwrap_or_else(|| vec![key])
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Overlays `extra` on the table: an entry with an existing skill key
    /// replaces it in place, anything else is appended. An entry left with no
    /// non-empty variant falls back to the skill itself.
    pub fn extend(mut self, extra: Vec<SynonymEntry>) -> Self {
        for entry in extra {
            let skill = entry.skill.to_lowercase();
            let mut variants: Vec<String> = entry
                .variants
                .iter()
                .map(|v| v.to_lowercase())
                .filter(|v| !v.is_empty())
                .collect();
            if variants.is_empty() {
                variants.push(skill.clone());
            }
            let entry = SynonymEntry { skill, variants };
            match self.entries.iter_mut().find(|e| e.skill == entry.skill) {
                Some(existing) => *existing = entry,
                None => self.entries.push(entry),
            }
        }
        self
    }

    /// Built-in table extended with the entries of a JSON synonyms file
    /// (`[{"skill": "...", "variants": [...]}]`).
    pub fn from_json_file(path: &Path) -> Result<Self, MatchError> {
        let raw = std::fs::read_to_string(path).map_err(|e| MatchError::io(path, e))?;
        let extra: Vec<SynonymEntry> =
            serde_json::from_str(&raw).map_err(|source| MatchError::Synonyms {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Loaded {} synonym entries from {}", extra.len(), path.display());
        Ok(Self::default().extend(extra))
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self {
            entries: BUILT_IN
                .iter()
                .map(|(skill, variants)| SynonymEntry {
                    skill: skill.to_string(),
                    variants: variants.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        }
    }
}
