mod config;
mod document;
mod errors;
mod extraction;
mod matching;
mod models;
mod pipeline;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pipeline::Pipeline;

fn main() -> Result<()> {
    // Load configuration first (fails on a missing resume path)
    let config = Config::from_env(std::env::args().nth(1))?;

    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-matcher v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Resume: {}, job description: {}",
        config.resume_path.display(),
        config.job_description_path.display()
    );

    let pipeline = Pipeline::new(&config);
    let result = pipeline.run(&config.resume_path, &config.job_description_path);

    let rendered =
        serde_json::to_string_pretty(&result).context("Failed to serialize match result")?;
    println!("{rendered}");

    Ok(())
}
