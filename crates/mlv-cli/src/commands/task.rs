use mlv_config::MlvConfig;
use mlv_core::{Execution, PipelineTask};
use mlv_params::ValueResolver;

use crate::cli::{OutputFormat, TaskArgs};
use crate::commands::read_json;
use crate::output;

/// Handle `mlv task`.
pub fn handle(args: &TaskArgs, config: &MlvConfig, format: OutputFormat) -> anyhow::Result<String> {
    let task: PipelineTask = read_json(&args.task)?;
    let execution = args
        .execution
        .as_deref()
        .map(read_json::<Execution>)
        .transpose()?;

    if execution.is_none() {
        tracing::info!(task = %task.name, "no execution given; showing declared values");
    }

    let resolver = ValueResolver::with_indent(config.display.json_indent);
    let view = resolver.task_io_view(&task, execution.as_ref());

    match format {
        OutputFormat::Json => output::json(&view),
        OutputFormat::Text => Ok(output::task_view(&view, &config.display.no_value_marker)),
    }
}
