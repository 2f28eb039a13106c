use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Job description location used when `JOB_DESCRIPTION_PATH` is unset.
pub const DEFAULT_JOB_DESCRIPTION_PATH: &str = "data/resources/job_description.txt";

/// Run configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_path: PathBuf,
    pub job_description_path: PathBuf,
    pub synonyms_path: Option<PathBuf>,
    pub preserve_line_breaks: bool,
    pub fixture_name_overrides: bool,
    pub rust_log: String,
}

impl Config {
    /// Reads the configuration. `resume_arg` (first positional argument) takes
    /// precedence over `RESUME_PATH`.
    pub fn from_env(resume_arg: Option<String>) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let resume_path = match resume_arg {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(require_env("RESUME_PATH")?),
        };

        Ok(Config {
            resume_path,
            job_description_path: std::env::var("JOB_DESCRIPTION_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_JOB_DESCRIPTION_PATH)),
            synonyms_path: std::env::var("SYNONYMS_PATH").ok().map(PathBuf::from),
            preserve_line_breaks: bool_env("PRESERVE_LINE_BREAKS", false)?,
            fixture_name_overrides: bool_env("FIXTURE_NAME_OVERRIDES", true)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| {
        format!("Required environment variable '{key}' is not set (or pass the resume path as the first argument)")
    })
}

fn bool_env(key: &str, default: bool) -> Result<bool> {
    match std::env::var(key) {
        Ok(value) => parse_bool(&value).with_context(|| format!("{key} must be a boolean")),
        Err(_) => Ok(default),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized boolean value '{other}'"),
    }
}
