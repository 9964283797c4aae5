use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mlv_core::{ParameterType, SearchType};

/// Top-level CLI parser for the `mlv` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mlv",
    version,
    about = "Inspect pipeline execution values and model versions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, text
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve one captured value against a declared parameter type
    Resolve(ResolveArgs),
    /// Show the input/output view of a pipeline task
    Task(TaskArgs),
    /// Show the details of a recorded artifact
    Artifact(ArtifactArgs),
    /// List a registered model's versions, optionally filtered
    Versions(VersionsArgs),
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Declared type (e.g. STRING, NUMBER_INTEGER, LIST)
    #[arg(short = 't', long = "type", value_parser = parse_parameter_type)]
    pub param_type: ParameterType,

    /// Captured value as JSON, e.g. '{"stringValue": "{\"a\": 1}"}'
    #[arg(long)]
    pub value: Option<String>,
}

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Pipeline task JSON file
    #[arg(long)]
    pub task: PathBuf,

    /// Execution JSON file with captured values
    #[arg(long)]
    pub execution: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ArtifactArgs {
    /// Artifact JSON file
    #[arg(long)]
    pub artifact: PathBuf,

    /// Name of the task that produced the artifact
    #[arg(long)]
    pub upstream_task: Option<String>,
}

#[derive(Debug, Args)]
pub struct VersionsArgs {
    /// JSON file holding an array of model versions (or `{"items": [...]}`)
    #[arg(long)]
    pub file: PathBuf,

    /// Field to search: keyword or owner (defaults to the configured type)
    #[arg(long, value_parser = parse_search_type)]
    pub by: Option<SearchType>,

    /// Search text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Registered model name used in the empty-state message
    #[arg(short, long, default_value = "This model")]
    pub model: String,
}

fn parse_parameter_type(s: &str) -> Result<ParameterType, String> {
    s.parse().map_err(|e: mlv_core::CoreError| e.to_string())
}

fn parse_search_type(s: &str) -> Result<SearchType, String> {
    s.parse().map_err(|e: mlv_core::CoreError| e.to_string())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_resolve_with_short_type_name() {
        let cli = Cli::try_parse_from(["mlv", "resolve", "--type", "integer", "--value", "{}"])
            .expect("should parse");
        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.param_type, ParameterType::Integer);
        assert_eq!(args.value.as_deref(), Some("{}"));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parses_versions_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mlv", "versions", "--file", "v.json", "--by", "owner", "-s", "alice", "-f", "json",
            "-v",
        ])
        .expect("should parse");
        let Commands::Versions(args) = cli.command else {
            panic!("expected versions");
        };
        assert_eq!(args.by, Some(SearchType::Owner));
        assert_eq!(args.search, "alice");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn parses_artifact_with_upstream_task() {
        let cli = Cli::try_parse_from([
            "mlv",
            "artifact",
            "--artifact",
            "a.json",
            "--upstream-task",
            "train",
        ])
        .expect("should parse");
        let Commands::Artifact(args) = cli.command else {
            panic!("expected artifact");
        };
        assert_eq!(args.artifact, PathBuf::from("a.json"));
        assert_eq!(args.upstream_task.as_deref(), Some("train"));
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(Cli::try_parse_from(["mlv", "resolve", "--type", "float"]).is_err());
    }
}
