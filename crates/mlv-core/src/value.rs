//! Captured execution values.
//!
//! The metadata store records each runtime parameter value as a protobuf
//! `google.protobuf.Value`. Here it is a sum type with exactly one populated
//! variant. A parameter with no captured value is `Option::<TypedValue>::None`,
//! never a variant of its own.
//!
//! On the wire each variant keeps its upstream field name:
//!
//! ```text
//! {"numberValue": 3}            {"listValue": [{"numberValue": 1}]}
//! {"boolValue": true}           {"structValue": {"a": {"stringValue": "x"}}}
//! {"stringValue": "abc"}        {"nullValue": null}   or   "nullValue"
//! ```

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest magnitude at which every integral `f64` is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A captured execution value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum TypedValue {
    #[serde(rename = "numberValue")]
    Number(f64),
    #[serde(rename = "boolValue")]
    Bool(bool),
    #[serde(rename = "stringValue")]
    String(String),
    #[serde(rename = "listValue")]
    List(Vec<TypedValue>),
    #[serde(rename = "structValue")]
    Struct(BTreeMap<String, TypedValue>),
    #[serde(rename = "nullValue")]
    Null,
}

impl TypedValue {
    /// Upstream field name of the populated variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "numberValue",
            Self::Bool(_) => "boolValue",
            Self::String(_) => "stringValue",
            Self::List(_) => "listValue",
            Self::Struct(_) => "structValue",
            Self::Null => "nullValue",
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_struct(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Convert to plain JSON (the proto3 JSON mapping of `Value`).
    ///
    /// Integral numbers inside the safe-integer range become JSON integers so
    /// `[1, 2, 3]` prints without fractional parts. Non-finite numbers have no
    /// JSON form and become `null`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Number(n) => number_to_json(*n),
            Self::Bool(b) => Value::Bool(*b),
            Self::String(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Struct(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Self::Null => Value::Null,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn number_to_json(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

/// Rewrite integral floats in `value` as JSON integers, recursively.
///
/// `1.0` parsed from text prints as `1`, the same as numbers coming through
/// [`TypedValue::to_json`]. Object key order is left alone.
#[must_use]
pub fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => n.as_f64().map_or(Value::Null, number_to_json),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, normalize_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}

impl From<Value> for TypedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Struct(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<f64> for TypedValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
