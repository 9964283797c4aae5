//! Parameter declarations from the pipeline spec.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ParameterType
// ---------------------------------------------------------------------------

/// Declared shape of a pipeline parameter, independent of what was captured.
///
/// Serialized with the pipeline-spec enum names. Names this crate does not
/// know deserialize as [`ParameterType::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterType {
    #[serde(rename = "NUMBER_DOUBLE")]
    Double,
    #[serde(rename = "NUMBER_INTEGER")]
    Integer,
    Boolean,
    String,
    List,
    Struct,
    TaskFinalStatus,
    #[serde(rename = "PARAMETER_TYPE_ENUM_UNSPECIFIED", other)]
    Unspecified,
}

impl ParameterType {
    pub const ALL: [Self; 8] = [
        Self::Double,
        Self::Integer,
        Self::Boolean,
        Self::String,
        Self::List,
        Self::Struct,
        Self::TaskFinalStatus,
        Self::Unspecified,
    ];

    /// Pipeline-spec name, also used as the last-resort display placeholder.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Double => "NUMBER_DOUBLE",
            Self::Integer => "NUMBER_INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::List => "LIST",
            Self::Struct => "STRUCT",
            Self::TaskFinalStatus => "TASK_FINAL_STATUS",
            Self::Unspecified => "PARAMETER_TYPE_ENUM_UNSPECIFIED",
        }
    }

    /// Whether the declared type renders as a structured code block.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::List | Self::Struct)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = CoreError;

    /// Accepts the pipeline-spec names and the short `DOUBLE` / `INTEGER`
    /// spellings, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.as_str() {
            "DOUBLE" => return Ok(Self::Double),
            "INTEGER" => return Ok(Self::Integer),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == upper)
            .ok_or_else(|| CoreError::UnknownParameterType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ParameterBinding
// ---------------------------------------------------------------------------

/// A task input or output parameter as declared in the pipeline spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParameterBinding {
    /// Unique within one task's input set or output set.
    pub label: String,
    /// Declared default, shown when nothing was captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
}

impl ParameterBinding {
    #[must_use]
    pub fn new(label: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            label: label.into(),
            value: None,
            param_type,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The declared value, treating an empty string as absent.
    #[must_use]
    pub fn declared_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("NUMBER_DOUBLE", ParameterType::Double)]
    #[case("double", ParameterType::Double)]
    #[case("Integer", ParameterType::Integer)]
    #[case("number_integer", ParameterType::Integer)]
    #[case("STRING", ParameterType::String)]
    #[case(" struct ", ParameterType::Struct)]
    #[case("TASK_FINAL_STATUS", ParameterType::TaskFinalStatus)]
    fn parses_type_names(#[case] input: &str, #[case] expected: ParameterType) {
        assert_eq!(input.parse::<ParameterType>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_type_names() {
        assert_eq!(
            "FLOAT".parse::<ParameterType>(),
            Err(CoreError::UnknownParameterType("FLOAT".into()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for ty in ParameterType::ALL {
            assert_eq!(ty.to_string().parse::<ParameterType>(), Ok(ty));
        }
    }

    #[test]
    fn unknown_wire_names_deserialize_as_unspecified() {
        let ty: ParameterType = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(ty, ParameterType::Unspecified);
    }

    #[test]
    fn empty_declared_value_counts_as_absent() {
        let binding = ParameterBinding::new("lr", ParameterType::Double).with_value("");
        assert_eq!(binding.declared_value(), None);
        let binding = binding.with_value("0.01");
        assert_eq!(binding.declared_value(), Some("0.01"));
    }

    #[test]
    fn binding_uses_type_key_on_the_wire() {
        let binding: ParameterBinding =
            serde_json::from_str(r#"{"label":"epochs","type":"NUMBER_INTEGER"}"#).unwrap();
        assert_eq!(binding, ParameterBinding::new("epochs", ParameterType::Integer));
    }
}
