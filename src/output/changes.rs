//! Uncommitted change and commit output formatter

use serde::Serialize;

use super::common::{format_timestamp, new_table, print_json, print_table, print_yaml};
use crate::cli::OutputFormat;
use crate::qbee::changes::{Change, CommitResult};

/// Serializable change for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableChange<'a> {
    sha: &'a str,
    target: Option<String>,
    formtype: &'a str,
    reset: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a serde_json::Value>,
}

impl<'a> From<&'a Change> for SerializableChange<'a> {
    fn from(change: &'a Change) -> Self {
        Self {
            sha: &change.sha,
            target: change.target().map(|t| t.to_string()),
            formtype: change.formtype(),
            reset: change.content.as_ref().is_some_and(|c| c.is_reset()),
            status: change.status.as_deref(),
            created: change.created,
            config: change.content.as_ref().map(|c| &c.config),
        }
    }
}

/// Output uncommitted changes in the specified format
pub fn output_changes(changes: &[Change], format: &OutputFormat) {
    match format {
        OutputFormat::Table => output_table(changes),
        OutputFormat::Json => print_json(&serializable(changes)),
        OutputFormat::Yaml => print_yaml(&serializable(changes)),
    }
}

fn serializable(changes: &[Change]) -> Vec<SerializableChange<'_>> {
    changes.iter().map(SerializableChange::from).collect()
}

fn output_table(changes: &[Change]) {
    let mut table = new_table(vec!["SHA", "Target", "Bundle", "Action", "Created"]);

    for change in changes {
        let action = match change.content {
            Some(ref content) if content.is_reset() => "reset",
            Some(_) => "write",
            None => "",
        };
        table.add_row(vec![
            change.short_sha().to_string(),
            change.target().map(|t| t.to_string()).unwrap_or_default(),
            change.formtype().to_string(),
            action.to_string(),
            format_timestamp(change.created),
        ]);
    }

    print_table(&table, changes.len(), "change");
}

/// Print a one-line summary of a commit
pub fn output_commit_result(result: &CommitResult) {
    if result.is_empty() {
        println!(
            "Nothing to commit{}",
            result
                .result
                .as_deref()
                .map(|r| format!(" ({})", r))
                .unwrap_or_default()
        );
    } else {
        println!(
            "✓ Committed {} change(s) as {}",
            result.changes.len(),
            result.sha.as_deref().unwrap_or("unknown")
        );
    }
}
