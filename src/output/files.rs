//! File manager output formatter

use super::common::{format_timestamp, new_table, print_json, print_table, print_yaml};
use crate::cli::OutputFormat;
use crate::qbee::FileEntry;

/// Output a directory listing in the specified format
pub fn output_files(files: &[FileEntry], format: &OutputFormat) {
    match format {
        OutputFormat::Table => output_table(files),
        OutputFormat::Json => print_json(files),
        OutputFormat::Yaml => print_yaml(files),
    }
}

fn output_table(files: &[FileEntry]) {
    let mut table = new_table(vec!["Type", "Name", "Size", "Created", "Path"]);

    for file in files {
        table.add_row(vec![
            file.kind().to_string(),
            file.name.clone(),
            file.size.map(|s| s.to_string()).unwrap_or_default(),
            format_timestamp(file.created),
            file.path.clone(),
        ]);
    }

    print_table(&table, files.len(), "entry");
}
