//! Inventory output formatter

use super::common::{new_table, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::qbee::NodeInventory;

/// Output a node inventory; the table shows the system summary only
pub fn output_inventory(inventory: &NodeInventory, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = new_table(vec!["Field", "Value"]);
            for (field, value) in inventory.summary() {
                table.add_row(vec![field.to_string(), value]);
            }
            println!("{table}");
        }
        OutputFormat::Json => print_json(inventory),
        OutputFormat::Yaml => print_yaml(inventory),
    }
}
