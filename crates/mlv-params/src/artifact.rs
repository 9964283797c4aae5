//! Details view of a single pipeline artifact.

use mlv_core::Artifact;
use serde::{Deserialize, Serialize};

/// What the artifact drawer shows for a selected artifact node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDetailsView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_task: Option<String>,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    /// Milliseconds since the Unix epoch, passed through unformatted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub uri: String,
}

/// Build the details view of `artifact`, produced by `upstream_task`.
#[must_use]
pub fn artifact_details(artifact: &Artifact, upstream_task: Option<&str>) -> ArtifactDetailsView {
    ArtifactDetailsView {
        upstream_task: upstream_task.map(str::to_string),
        id: artifact.id.clone(),
        name: artifact_name(artifact).to_string(),
        artifact_type: artifact.artifact_type.clone(),
        created_at: artifact.create_time_since_epoch.clone(),
        uri: artifact.uri.clone(),
    }
}

/// `display_name` if recorded, else the last path segment of the URI, else the id.
#[must_use]
pub fn artifact_name(artifact: &Artifact) -> &str {
    artifact
        .display_name()
        .or_else(|| {
            artifact
                .uri
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .filter(|segment| !segment.is_empty())
        })
        .unwrap_or(&artifact.id)
}
