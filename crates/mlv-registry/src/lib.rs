//! # mlv-registry
//!
//! Model-registry view logic:
//! - [`filter_model_versions`]: order-preserving search over model versions
//! - [`ListViewState`] and [`list_view`]: search state and the derived
//!   model-version list, including the "no versions yet" empty state

pub mod filter;
pub mod list_view;

pub use filter::{filter_model_versions, filter_refs, matches};
pub use list_view::{EmptyState, ListViewState, ModelVersionListView, list_view};
