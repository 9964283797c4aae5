//! Model-registry records and search criteria.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ModelVersion
// ---------------------------------------------------------------------------

/// Lifecycle state of a registered model version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelVersionState {
    #[default]
    Live,
    Archived,
}

impl ModelVersionState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for ModelVersionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered, versioned artifact entry within a model registry.
///
/// Only `id`, `name` and `owner` are constrained; the rest is descriptive and
/// passed through to renderers untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersion {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "author")]
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub state: ModelVersionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_model_id: Option<String>,
    /// Milliseconds since the Unix epoch, as the registry API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time_since_epoch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time_since_epoch: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_properties: BTreeMap<String, serde_json::Value>,
}

impl ModelVersion {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            description: None,
            state: ModelVersionState::Live,
            registered_model_id: None,
            create_time_since_epoch: None,
            last_update_time_since_epoch: None,
            custom_properties: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchType
// ---------------------------------------------------------------------------

/// Which field a model-version search matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Matches the version name.
    #[default]
    #[serde(alias = "Keyword")]
    Keyword,
    /// Matches the version owner.
    #[serde(alias = "Owner")]
    Owner,
}

impl SearchType {
    pub const ALL: [Self; 2] = [Self::Keyword, Self::Owner];

    /// Label shown in the search-type dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Keyword => "Keyword",
            Self::Owner => "Owner",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Owner => "owner",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSearchType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SearchCriterion
// ---------------------------------------------------------------------------

/// A search over model versions. Empty `text` matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchCriterion {
    pub kind: SearchType,
    pub text: String,
}

impl SearchCriterion {
    #[must_use]
    pub fn new(kind: SearchType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(SearchType::Keyword, text)
    }

    #[must_use]
    pub fn owner(text: impl Into<String>) -> Self {
        Self::new(SearchType::Owner, text)
    }

    /// Whether this criterion lets every record through.
    #[must_use]
    pub fn matches_all(&self) -> bool {
        self.text.is_empty()
    }
}
