//! Input/output view of a pipeline task, resolved against its execution.

use std::fmt;

use mlv_core::pipeline::{INPUTS_PROPERTY, OUTPUTS_PROPERTY};
use mlv_core::{Execution, PipelineTask, TaskIo};
use serde::{Deserialize, Serialize};

use crate::resolve::{ResolvedParam, ValueResolver};

/// Which side of a task a section describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IoKind {
    Input,
    Output,
}

impl IoKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Output => "Output",
        }
    }

    /// Execution custom property holding this side's captured values.
    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::Input => INPUTS_PROPERTY,
            Self::Output => OUTPUTS_PROPERTY,
        }
    }
}

impl fmt::Display for IoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An artifact row: its label and its artifact type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoSection {
    pub kind: IoKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<ResolvedArtifact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ResolvedParam>>,
}

/// What the task drawer shows for a selected node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum TaskIoView {
    /// The task declares neither inputs nor outputs.
    NoContent,
    Sections {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        input: Option<IoSection>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output: Option<IoSection>,
    },
}

impl ValueResolver {
    /// Build the input/output view of `task`.
    ///
    /// Without an execution every parameter falls back to its declared value
    /// or type name.
    #[must_use]
    pub fn task_io_view(&self, task: &PipelineTask, execution: Option<&Execution>) -> TaskIoView {
        if task.inputs.is_none() && task.outputs.is_none() {
            return TaskIoView::NoContent;
        }

        TaskIoView::Sections {
            input: task
                .inputs
                .as_ref()
                .map(|io| self.io_section(IoKind::Input, io, execution)),
            output: task
                .outputs
                .as_ref()
                .map(|io| self.io_section(IoKind::Output, io, execution)),
        }
    }

    fn io_section(&self, kind: IoKind, io: &TaskIo, execution: Option<&Execution>) -> IoSection {
        let captured = execution.and_then(|e| e.fields(kind.property()));

        IoSection {
            kind,
            artifacts: io.artifacts.as_ref().map(|artifacts| {
                artifacts
                    .iter()
                    .map(|a| ResolvedArtifact {
                        label: a.label.clone(),
                        value: a.artifact_type.clone(),
                    })
                    .collect()
            }),
            params: io
                .params
                .as_ref()
                .map(|params| self.resolve_params(params, captured)),
        }
    }
}

/// [`ValueResolver::task_io_view`] with the default resolver.
#[must_use]
pub fn task_io_view(task: &PipelineTask, execution: Option<&Execution>) -> TaskIoView {
    ValueResolver::new().task_io_view(task, execution)
}
