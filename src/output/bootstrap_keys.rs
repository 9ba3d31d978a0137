//! Bootstrap key output formatter

use super::common::{format_timestamp, new_table, print_json, print_table, print_yaml, yes_no};
use crate::cli::OutputFormat;
use crate::qbee::BootstrapKey;

/// Output bootstrap keys in the specified format
pub fn output_bootstrap_keys(keys: &[BootstrapKey], format: &OutputFormat) {
    match format {
        OutputFormat::Table => output_table(keys),
        OutputFormat::Json => print_json(keys),
        OutputFormat::Yaml => print_yaml(keys),
    }
}

fn output_table(keys: &[BootstrapKey]) {
    let mut table = new_table(vec!["ID", "Group", "Auto Accept", "Created"]);

    for key in keys {
        table.add_row(vec![
            key.id.clone(),
            key.group_id.clone().unwrap_or_default(),
            yes_no(key.auto_accept).to_string(),
            format_timestamp(key.created),
        ]);
    }

    print_table(&table, keys.len(), "bootstrap key");
}
