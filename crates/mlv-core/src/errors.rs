//! Cross-cutting error types for mlv.
//!
//! Only parsing of user-supplied names can fail. The value transformations in
//! `mlv-params` and `mlv-registry` always degrade to a renderable result and
//! have no error path of their own.

use thiserror::Error;

/// Errors that can be raised by any mlv crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A parameter type name did not match any known pipeline-spec type.
    #[error("Unknown parameter type: {0}")]
    UnknownParameterType(String),

    /// A search type name did not match any known search type.
    #[error("Unknown search type: {0} (expected keyword or owner)")]
    UnknownSearchType(String),
}
