//! Text and JSON rendering of command results.

use std::fmt::Write as _;

use mlv_core::{DisplayValue, ModelVersion};
use mlv_params::{ArtifactDetailsView, IoSection, TaskIoView};
use mlv_registry::ModelVersionListView;
use serde::Serialize;

/// Pretty JSON of any serializable result.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn task_view(view: &TaskIoView, no_value_marker: &str) -> String {
    match view {
        TaskIoView::NoContent => "No content".to_string(),
        TaskIoView::Sections { input, output } => [input, output]
            .into_iter()
            .flatten()
            .map(|section| io_section(section, no_value_marker))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn io_section(section: &IoSection, no_value_marker: &str) -> String {
    let mut out = format!("{}\n", section.kind);
    if let Some(artifacts) = &section.artifacts {
        out.push_str("  Artifacts\n");
        for artifact in artifacts {
            let _ = writeln!(out, "    {}: {}", artifact.label, artifact.value);
        }
    }
    if let Some(params) = &section.params {
        out.push_str("  Parameters\n");
        for param in params {
            let _ = writeln!(
                out,
                "    {}: {}",
                param.label,
                cell(&param.value, no_value_marker)
            );
        }
    }
    out
}

/// One value on a labelled line; code blocks continue indented below it.
fn cell(value: &DisplayValue, no_value_marker: &str) -> String {
    let text = value.to_text(no_value_marker);
    if value.is_code() && text.contains('\n') {
        text.replace('\n', "\n      ")
    } else {
        text
    }
}

pub fn artifact_details(view: &ArtifactDetailsView, no_value_marker: &str) -> String {
    let mut out = String::from("Artifact details\n");
    let rows = [
        ("Upstream task", view.upstream_task.as_deref()),
        ("Artifact name", Some(view.name.as_str())),
        ("Artifact type", Some(view.artifact_type.as_str())),
        ("Created at", view.created_at.as_deref()),
    ];
    for (term, description) in rows {
        let _ = writeln!(out, "  {term:<15}{}", description.unwrap_or(no_value_marker));
    }
    out.push_str("Artifact URI\n");
    let _ = writeln!(out, "  {}: {}", view.name, view.uri);
    out
}

pub fn version_list(view: &ModelVersionListView) -> String {
    match view {
        ModelVersionListView::Empty(empty) => {
            format!(
                "{}\n{}\n\n[{}] [{}]",
                empty.title, empty.description, empty.primary_action, empty.secondary_action
            )
        }
        ModelVersionListView::Table { .. } if view.is_filtered_out() => {
            "No results found. Adjust your filters and try again.".to_string()
        }
        ModelVersionListView::Table {
            versions, total, ..
        } => version_table(versions, *total),
    }
}

fn version_table(versions: &[ModelVersion], total: usize) -> String {
    let headers = ["ID", "NAME", "OWNER", "STATE"];
    let rows: Vec<[String; 4]> = versions
        .iter()
        .map(|v| {
            [
                v.id.clone(),
                v.name.clone(),
                v.owner.clone(),
                v.state.as_str().to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(str::to_string), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    let _ = write!(out, "{} of {total} versions", rows.len());
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
