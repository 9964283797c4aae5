//! Serde roundtrip and JsonSchema validation tests for the data model.

use std::collections::BTreeMap;

use mlv_core::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    typed_value_roundtrip,
    TypedValue,
    TypedValue::Struct(BTreeMap::from([
        ("lr".to_string(), TypedValue::Number(0.001)),
        (
            "layers".to_string(),
            TypedValue::List(vec![TypedValue::Number(64.0), TypedValue::Number(32.0)]),
        ),
        ("shuffle".to_string(), TypedValue::Bool(true)),
        ("note".to_string(), TypedValue::Null),
    ]))
);

roundtrip_and_validate!(
    parameter_binding_roundtrip,
    ParameterBinding,
    ParameterBinding::new("epochs", ParameterType::Integer).with_value("10")
);

roundtrip_and_validate!(
    pipeline_task_roundtrip,
    PipelineTask,
    PipelineTask {
        name: "train".into(),
        inputs: Some(TaskIo {
            artifacts: Some(vec![ArtifactBinding {
                label: "dataset".into(),
                artifact_type: "system.Dataset".into(),
            }]),
            params: Some(vec![ParameterBinding::new("lr", ParameterType::Double)]),
        }),
        outputs: None,
    }
);

roundtrip_and_validate!(
    execution_roundtrip,
    Execution,
    Execution {
        id: "17".into(),
        custom_properties: BTreeMap::from([(
            "inputs".to_string(),
            TypedValue::Struct(BTreeMap::from([(
                "name".to_string(),
                TypedValue::String("{\"a\":1}".into()),
            )])),
        )]),
    }
);

roundtrip_and_validate!(
    artifact_roundtrip,
    Artifact,
    Artifact {
        id: "5".into(),
        artifact_type: "system.Model".into(),
        uri: "s3://models/fraud/model".into(),
        create_time_since_epoch: Some("1712234877179".into()),
        custom_properties: BTreeMap::from([(
            "display_name".to_string(),
            TypedValue::from("fraud-model"),
        )]),
    }
);

roundtrip_and_validate!(
    model_version_roundtrip,
    ModelVersion,
    ModelVersion {
        description: Some("fraud detector".into()),
        state: ModelVersionState::Archived,
        registered_model_id: Some("1".into()),
        ..ModelVersion::new("3", "Version 3", "alice")
    }
);

roundtrip_and_validate!(
    search_criterion_roundtrip,
    SearchCriterion,
    SearchCriterion::owner("alice")
);

roundtrip_and_validate!(
    display_value_roundtrip,
    DisplayValue,
    DisplayValue::code("{\n  \"a\": 1\n}")
);
