use mlv_config::MlvConfig;
use mlv_core::Artifact;
use mlv_params::artifact_details;

use crate::cli::{ArtifactArgs, OutputFormat};
use crate::commands::read_json;
use crate::output;

/// Handle `mlv artifact`.
pub fn handle(
    args: &ArtifactArgs,
    config: &MlvConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let artifact: Artifact = read_json(&args.artifact)?;
    let view = artifact_details(&artifact, args.upstream_task.as_deref());
    tracing::debug!(artifact = %view.id, name = %view.name, "built artifact details");

    match format {
        OutputFormat::Json => output::json(&view),
        OutputFormat::Text => Ok(output::artifact_details(&view, &config.display.no_value_marker)),
    }
}
