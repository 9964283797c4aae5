//! Search state and derived view of a registered model's versions.
//!
//! State flows one way: transitions consume a [`ListViewState`] and return a
//! new one, and [`list_view`] derives what to render from the unfiltered
//! versions plus the current state.

use mlv_core::{ModelVersion, SearchCriterion, SearchType};
use serde::{Deserialize, Serialize};

use crate::filter::filter_model_versions;

/// Search type and text of the model-version toolbar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewState {
    pub search_type: SearchType,
    pub search: String,
}

impl ListViewState {
    #[must_use]
    pub fn new(search_type: SearchType) -> Self {
        Self {
            search_type,
            search: String::new(),
        }
    }

    #[must_use]
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    /// Switch the field being searched. The search text is kept.
    #[must_use]
    pub fn with_search_type(self, search_type: SearchType) -> Self {
        Self {
            search_type,
            ..self
        }
    }

    /// Clear the search text, keeping the search type.
    #[must_use]
    pub fn cleared(self) -> Self {
        self.with_search(String::new())
    }

    #[must_use]
    pub fn criterion(&self) -> SearchCriterion {
        SearchCriterion::new(self.search_type, self.search.clone())
    }

    /// Active filter chips: the search text, if any.
    #[must_use]
    pub fn chips(&self) -> Vec<String> {
        if self.search.is_empty() {
            Vec::new()
        } else {
            vec![self.search.clone()]
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("Find by {}", self.search_type.as_str())
    }

    #[must_use]
    pub const fn search_types() -> [SearchType; 2] {
        SearchType::ALL
    }
}

/// Shown when a registered model has no versions at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyState {
    pub title: String,
    pub description: String,
    pub primary_action: String,
    pub secondary_action: String,
}

impl EmptyState {
    #[must_use]
    pub fn no_versions(registered_model_name: &str) -> Self {
        Self {
            title: "No versions".to_string(),
            description: format!(
                "{registered_model_name} has no versions registered to it. Register a version to this model."
            ),
            primary_action: "Register new version".to_string(),
            secondary_action: "View archived versions".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ModelVersionListView {
    /// No versions exist yet.
    Empty(EmptyState),
    /// Versions exist; `versions` holds those passing the current search.
    Table {
        versions: Vec<ModelVersion>,
        /// Number of versions before filtering.
        total: usize,
        chips: Vec<String>,
        placeholder: String,
    },
}

impl ModelVersionListView {
    /// Versions exist but the search matched none of them.
    #[must_use]
    pub fn is_filtered_out(&self) -> bool {
        matches!(self, Self::Table { versions, total, .. } if versions.is_empty() && *total > 0)
    }

    #[must_use]
    pub fn versions(&self) -> &[ModelVersion] {
        match self {
            Self::Empty(_) => &[],
            Self::Table { versions, .. } => versions,
        }
    }
}

/// Derive the list view from the unfiltered versions and the current state.
#[must_use]
pub fn list_view(
    versions: &[ModelVersion],
    registered_model_name: &str,
    state: &ListViewState,
) -> ModelVersionListView {
    if versions.is_empty() {
        return ModelVersionListView::Empty(EmptyState::no_versions(registered_model_name));
    }

    ModelVersionListView::Table {
        versions: filter_model_versions(versions, &state.criterion()),
        total: versions.len(),
        chips: state.chips(),
        placeholder: state.placeholder(),
    }
}
