//! Common utilities for output formatters

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::DocumentFormat;

/// Print data as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize JSON: {}", e),
    }
}

/// Print data as YAML
pub fn print_yaml<T: Serialize + ?Sized>(data: &T) {
    match serde_yml::to_string(data) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Failed to serialize YAML: {}", e),
    }
}

/// Print a single document (bundle payload, role) in the requested format
pub fn print_document<T: Serialize + ?Sized>(data: &T, format: &DocumentFormat) {
    match format {
        DocumentFormat::Json => print_json(data),
        DocumentFormat::Yaml => print_yaml(data),
    }
}

/// Borderless table with a header row
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(header);
    table
}

/// Print a table followed by a total line
pub fn print_table(table: &Table, count: usize, noun: &str) {
    println!();
    println!("{table}");
    println!("\nTotal: {} {}(s)", count, noun);
}

/// Format a unix timestamp as RFC 3339, empty if absent or out of range
pub fn format_timestamp(ts: Option<i64>) -> String {
    ts.and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
        .map(|t| t.to_rfc3339())
        .unwrap_or_default()
}

/// Render a boolean as Yes/No
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(Some(0)), "1970-01-01T00:00:00+00:00");
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }

    #[test]
    fn test_new_table_has_header() {
        let table = new_table(vec!["Name", "Value"]);
        let rendered = table.to_string();
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Value"));
    }
}
