use mlv_config::MlvConfig;
use mlv_core::ModelVersion;
use mlv_registry::{ListViewState, list_view};
use serde::Deserialize;

use crate::cli::{OutputFormat, VersionsArgs};
use crate::commands::read_json;
use crate::output;

/// Either a bare array or the registry API's paged list shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionListing {
    Items { items: Vec<ModelVersion> },
    Bare(Vec<ModelVersion>),
}

impl VersionListing {
    fn into_versions(self) -> Vec<ModelVersion> {
        match self {
            Self::Items { items } => items,
            Self::Bare(versions) => versions,
        }
    }
}

/// Handle `mlv versions`.
pub fn handle(
    args: &VersionsArgs,
    config: &MlvConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let versions = read_json::<VersionListing>(&args.file)?.into_versions();

    let state = ListViewState::new(args.by.unwrap_or(config.registry.default_search_type))
        .with_search(args.search.as_str());
    let view = list_view(&versions, &args.model, &state);
    tracing::debug!(
        total = versions.len(),
        shown = view.versions().len(),
        search_type = %state.search_type,
        "filtered model versions"
    );

    match format {
        OutputFormat::Json => output::json(&view),
        OutputFormat::Text => Ok(output::version_list(&view)),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mlv_core::SearchType;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const LISTING: &str = r#"{
        "items": [
            {"id": "1", "name": "Alpha", "author": "bob"},
            {"id": "2", "name": "beta", "author": "alice", "state": "ARCHIVED"}
        ],
        "nextPageToken": "",
        "pageSize": 0,
        "size": 2
    }"#;

    fn listing(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("versions.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn args(file: PathBuf, by: Option<SearchType>, search: &str) -> VersionsArgs {
        VersionsArgs {
            file,
            by,
            search: search.to_string(),
            model: "fraud".to_string(),
        }
    }

    #[test]
    fn filters_paged_listing_by_owner() {
        let dir = TempDir::new().unwrap();
        let out = handle(
            &args(listing(&dir, LISTING), Some(SearchType::Owner), "ALICE"),
            &MlvConfig::default(),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(out, "ID  NAME  OWNER  STATE\n2   beta  alice  ARCHIVED\n1 of 2 versions");
    }

    #[test]
    fn uses_configured_default_search_type() {
        let dir = TempDir::new().unwrap();
        let mut config = MlvConfig::default();
        config.registry.default_search_type = SearchType::Owner;

        let out = handle(
            &args(listing(&dir, LISTING), None, "bob"),
            &config,
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["versions"][0]["id"], "1");
        assert_eq!(value["placeholder"], "Find by owner");
    }

    #[test]
    fn empty_listing_shows_empty_state() {
        let dir = TempDir::new().unwrap();
        let out = handle(
            &args(listing(&dir, "[]"), None, "anything"),
            &MlvConfig::default(),
            OutputFormat::Text,
        )
        .unwrap();
        assert!(out.starts_with("No versions\nfraud has no versions registered to it."));
    }

    #[test]
    fn over_filtered_listing_says_so() {
        let dir = TempDir::new().unwrap();
        let out = handle(
            &args(listing(&dir, LISTING), None, "zeta"),
            &MlvConfig::default(),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(out, "No results found. Adjust your filters and try again.");
    }
}
