//! How resolved values are printed.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default indentation of pretty-printed JSON blocks.
const fn default_json_indent() -> usize {
    2
}

fn default_no_value_marker() -> String {
    "-".to_string()
}

const MAX_JSON_INDENT: usize = 8;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Spaces per nesting level in JSON code blocks.
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,

    /// Text printed for values that have nothing to show.
    #[serde(default = "default_no_value_marker")]
    pub no_value_marker: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            json_indent: default_json_indent(),
            no_value_marker: default_no_value_marker(),
        }
    }
}

impl DisplayConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `json_indent` is outside
    /// `1..=8` or `no_value_marker` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_JSON_INDENT).contains(&self.json_indent) {
            return Err(ConfigError::InvalidValue {
                field: "display.json_indent".into(),
                reason: format!(
                    "must be between 1 and {MAX_JSON_INDENT}, got {}",
                    self.json_indent
                ),
            });
        }
        if self.no_value_marker.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "display.no_value_marker".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
