use anyhow::Context;
use mlv_config::MlvConfig;
use mlv_core::TypedValue;
use mlv_params::ValueResolver;

use crate::cli::{OutputFormat, ResolveArgs};
use crate::output;

/// Handle `mlv resolve`.
pub fn handle(
    args: &ResolveArgs,
    config: &MlvConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let captured: Option<TypedValue> = args
        .value
        .as_deref()
        .map(serde_json::from_str::<TypedValue>)
        .transpose()
        .context("--value is not a captured value (expected e.g. {\"numberValue\": 1})")?;

    let resolver = ValueResolver::with_indent(config.display.json_indent);
    let resolved = resolver.resolve(captured.as_ref(), args.param_type);
    tracing::debug!(
        param_type = %args.param_type,
        captured = captured.as_ref().map(TypedValue::kind),
        resolved = resolved.is_some(),
        "resolved value"
    );

    match format {
        OutputFormat::Json => output::json(&resolved),
        OutputFormat::Text => Ok(resolved.map_or_else(
            || config.display.no_value_marker.clone(),
            |value| value.to_text(&config.display.no_value_marker),
        )),
    }
}
