//! Interpret captured execution values against their declared parameter type.
//!
//! | declared type        | captured variant used | result                                   |
//! |----------------------|-----------------------|------------------------------------------|
//! | `NUMBER_DOUBLE`/`_INTEGER` | `numberValue`   | the number verbatim, else absent         |
//! | `BOOLEAN`            | `boolValue`           | `"True"` / `"False"`, else absent        |
//! | `STRING`             | `stringValue`         | pretty JSON if it parses to a non-number, else the raw string, else no-value |
//! | `LIST`               | `listValue`           | pretty JSON (`null` when missing)        |
//! | `STRUCT`             | `structValue`         | pretty JSON (`null` when missing)        |
//! | anything else        | `nullValue`           | absent                                   |

use std::collections::BTreeMap;

use mlv_core::{DisplayValue, ParameterBinding, ParameterType, TypedValue, normalize_numbers};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ParseError;

/// Indentation width of pretty-printed JSON blocks.
pub const DEFAULT_JSON_INDENT: usize = 2;

/// A parameter label paired with the value to display for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParam {
    pub label: String,
    pub value: DisplayValue,
}

/// Resolves captured values into [`DisplayValue`]s.
///
/// Stateless apart from the JSON indentation width, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueResolver {
    indent: usize,
}

impl Default for ValueResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indent: DEFAULT_JSON_INDENT,
        }
    }

    #[must_use]
    pub const fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    #[must_use]
    pub const fn indent(&self) -> usize {
        self.indent
    }

    /// Resolve one captured value against its declared type.
    ///
    /// `None` means "nothing to show"; callers fall back to the declared
    /// value and then the type name (see [`resolve_binding`](Self::resolve_binding)).
    #[must_use]
    pub fn resolve(
        &self,
        captured: Option<&TypedValue>,
        declared: ParameterType,
    ) -> Option<DisplayValue> {
        match declared {
            ParameterType::Double | ParameterType::Integer => {
                captured.and_then(TypedValue::as_number).map(DisplayValue::Number)
            }
            ParameterType::Boolean => captured
                .and_then(TypedValue::as_bool)
                .map(|b| DisplayValue::text(if b { "True" } else { "False" })),
            ParameterType::String => {
                let raw = captured.and_then(TypedValue::as_str).unwrap_or_default();
                Some(self.resolve_string(raw))
            }
            ParameterType::List | ParameterType::Struct => {
                let json = captured
                    .filter(|value| variant_matches(value, declared))
                    .map_or(Value::Null, TypedValue::to_json);
                Some(DisplayValue::Code(self.pretty(&json)))
            }
            // Only the null variant is left for these, and it has nothing to render.
            ParameterType::TaskFinalStatus | ParameterType::Unspecified => None,
        }
    }

    /// Resolve a binding against the captured fields of its side of the task.
    ///
    /// Priority: resolved captured value, then the declared value, then the
    /// declared type name. A label with no captured entry goes straight to the
    /// fallbacks. Always produces something renderable.
    #[must_use]
    pub fn resolve_binding(
        &self,
        binding: &ParameterBinding,
        captured: Option<&BTreeMap<String, TypedValue>>,
    ) -> ResolvedParam {
        let value = captured
            .and_then(|fields| fields.get(&binding.label))
            .and_then(|value| self.resolve(Some(value), binding.param_type))
            .or_else(|| binding.declared_value().map(DisplayValue::text))
            .unwrap_or_else(|| DisplayValue::text(binding.param_type.as_str()));

        ResolvedParam {
            label: binding.label.clone(),
            value,
        }
    }

    /// [`resolve_binding`](Self::resolve_binding) over every binding, in order.
    #[must_use]
    pub fn resolve_params(
        &self,
        bindings: &[ParameterBinding],
        captured: Option<&BTreeMap<String, TypedValue>>,
    ) -> Vec<ResolvedParam> {
        bindings
            .iter()
            .map(|binding| self.resolve_binding(binding, captured))
            .collect()
    }

    fn resolve_string(&self, raw: &str) -> DisplayValue {
        match parse_string_payload(raw) {
            Ok(parsed) => DisplayValue::Code(self.pretty(&normalize_numbers(parsed))),
            Err(_) if raw.is_empty() => DisplayValue::NoValue,
            Err(_) => DisplayValue::text(raw),
        }
    }

    fn pretty(&self, value: &Value) -> String {
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        match value.serialize(&mut serializer) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => "null".to_string(),
        }
    }
}

/// Resolve with the default 2-space indentation.
#[must_use]
pub fn resolve(captured: Option<&TypedValue>, declared: ParameterType) -> Option<DisplayValue> {
    ValueResolver::new().resolve(captured, declared)
}

/// Parse a `STRING` payload as structured JSON.
///
/// Payloads that decode to something readable as a finite number are
/// rejected with [`ParseError::Numeric`], so `"5"` or `"\"5\""` stay raw
/// strings instead of turning into the number 5.
///
/// # Errors
///
/// [`ParseError::Malformed`] for invalid JSON, [`ParseError::Numeric`] for
/// numeric-looking results.
pub fn parse_string_payload(raw: &str) -> Result<Value, ParseError> {
    let parsed: Value = serde_json::from_str(raw)?;
    if reads_as_finite_number(&parsed) {
        return Err(ParseError::Numeric);
    }
    Ok(parsed)
}

const fn variant_matches(value: &TypedValue, declared: ParameterType) -> bool {
    matches!(
        (value, declared),
        (TypedValue::List(_), ParameterType::List) | (TypedValue::Struct(_), ParameterType::Struct)
    )
}

fn reads_as_finite_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(f64::is_finite),
        Value::String(s) => leading_float(s).is_some_and(f64::is_finite),
        _ => false,
    }
}

/// Longest decimal-float prefix of `s` after leading whitespace, the way
/// JavaScript's `parseFloat` reads it (`"12px"` is 12, `"px"` is nothing).
fn leading_float(s: &str) -> Option<f64> {
    const INFINITY: &str = "Infinity";

    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with(INFINITY) {
        let sign = &s[..end];
        return format!("{sign}inf").parse().ok();
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits + (frac_end - frac_start) > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
