//! Display-ready values handed to presentation layers.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder glyph for [`DisplayValue::NoValue`] when no other marker is configured.
pub const DEFAULT_NO_VALUE_MARKER: &str = "-";

/// A value ready to render.
///
/// `Code` carries pretty-printed JSON and is tagged so the renderer can
/// syntax-highlight it. `NoValue` is an explicit marker, distinct from an
/// empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayValue {
    Number(f64),
    Text(String),
    Code(String),
    NoValue,
}

impl DisplayValue {
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    #[must_use]
    pub fn code(s: impl Into<String>) -> Self {
        Self::Code(s.into())
    }

    #[must_use]
    pub const fn is_code(&self) -> bool {
        matches!(self, Self::Code(_))
    }

    #[must_use]
    pub const fn is_no_value(&self) -> bool {
        matches!(self, Self::NoValue)
    }

    /// Render as plain text, printing `NoValue` as `no_value_marker`.
    #[must_use]
    pub fn to_text(&self, no_value_marker: &str) -> String {
        match self {
            Self::NoValue => no_value_marker.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) | Self::Code(s) => f.write_str(s),
            Self::NoValue => f.write_str(DEFAULT_NO_VALUE_MARKER),
        }
    }
}
