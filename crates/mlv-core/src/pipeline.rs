//! Pipeline tasks and their recorded executions.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::parameter::ParameterBinding;
use crate::value::TypedValue;

/// Custom property holding captured input parameters.
pub const INPUTS_PROPERTY: &str = "inputs";
/// Custom property holding captured output parameters.
pub const OUTPUTS_PROPERTY: &str = "outputs";
/// Custom property holding an artifact's human-readable name.
pub const DISPLAY_NAME_PROPERTY: &str = "display_name";

/// An artifact declared on a task input or output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArtifactBinding {
    pub label: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
}

/// Declared artifacts and parameters of one side (inputs or outputs) of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskIo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<ArtifactBinding>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ParameterBinding>>,
}

/// A single step of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PipelineTask {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<TaskIo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<TaskIo>,
}

/// A recorded run of a pipeline step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: String,
    #[serde(default)]
    pub custom_properties: BTreeMap<String, TypedValue>,
}

impl Execution {
    /// Captured values stored under the struct-valued custom property `key`.
    ///
    /// Returns `None` when the property is missing or is not a struct.
    #[must_use]
    pub fn fields(&self, key: &str) -> Option<&BTreeMap<String, TypedValue>> {
        self.custom_properties.get(key).and_then(TypedValue::as_struct)
    }

    #[must_use]
    pub fn inputs(&self) -> Option<&BTreeMap<String, TypedValue>> {
        self.fields(INPUTS_PROPERTY)
    }

    #[must_use]
    pub fn outputs(&self) -> Option<&BTreeMap<String, TypedValue>> {
        self.fields(OUTPUTS_PROPERTY)
    }
}

/// An artifact recorded by the metadata store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: String,
    #[serde(default, rename = "type")]
    pub artifact_type: String,
    #[serde(default)]
    pub uri: String,
    /// Milliseconds since the Unix epoch, as the metadata store reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time_since_epoch: Option<String>,
    #[serde(default)]
    pub custom_properties: BTreeMap<String, TypedValue>,
}

impl Artifact {
    /// Non-empty `display_name` custom property, if recorded.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.custom_properties
            .get(DISPLAY_NAME_PROPERTY)
            .and_then(TypedValue::as_str)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn execution_fields_read_struct_properties() {
        let execution: Execution = serde_json::from_value(json!({
            "id": "42",
            "customProperties": {
                "inputs": {"structValue": {"epochs": {"numberValue": 3}}},
                "display_name": {"stringValue": "train"}
            }
        }))
        .unwrap();

        let inputs = execution.inputs().unwrap();
        assert_eq!(inputs.get("epochs"), Some(&TypedValue::Number(3.0)));
        assert!(execution.outputs().is_none());
        assert!(execution.fields("display_name").is_none());
    }

    #[test]
    fn task_io_sides_are_optional() {
        let task: PipelineTask = serde_json::from_value(json!({
            "name": "train",
            "inputs": {"params": [{"label": "lr", "type": "NUMBER_DOUBLE", "value": "0.1"}]}
        }))
        .unwrap();

        let inputs = task.inputs.unwrap();
        assert!(inputs.artifacts.is_none());
        assert_eq!(inputs.params.unwrap()[0].value.as_deref(), Some("0.1"));
        assert!(task.outputs.is_none());
    }

    #[test]
    fn artifact_display_name_ignores_empty_and_non_string() {
        let artifact: Artifact = serde_json::from_value(json!({
            "id": "7",
            "type": "system.Model",
            "uri": "s3://bucket/model",
            "createTimeSinceEpoch": "1712234877179",
            "customProperties": {"display_name": {"stringValue": "model"}}
        }))
        .unwrap();
        assert_eq!(artifact.display_name(), Some("model"));
        assert_eq!(artifact.create_time_since_epoch.as_deref(), Some("1712234877179"));

        let mut unnamed = artifact.clone();
        unnamed
            .custom_properties
            .insert(DISPLAY_NAME_PROPERTY.into(), TypedValue::from(""));
        assert_eq!(unnamed.display_name(), None);

        unnamed
            .custom_properties
            .insert(DISPLAY_NAME_PROPERTY.into(), TypedValue::Number(1.0));
        assert_eq!(unnamed.display_name(), None);
    }
}
