use std::path::Path;

use anyhow::Context;
use mlv_config::MlvConfig;
use serde::de::DeserializeOwned;

use crate::cli::{Commands, OutputFormat};

pub mod artifact;
pub mod resolve;
pub mod task;
pub mod versions;

/// Run a command and return its rendered output.
pub fn dispatch(
    command: &Commands,
    config: &MlvConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match command {
        Commands::Resolve(args) => resolve::handle(args, config, format),
        Commands::Task(args) => task::handle(args, config, format),
        Commands::Artifact(args) => artifact::handle(args, config, format),
        Commands::Versions(args) => versions::handle(args, config, format),
    }
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "loaded input file");
    Ok(value)
}
