//! Inventory command arguments

use clap::Subcommand;

use super::common::OutputFormat;

/// Subcommands of 'inventory'
#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// Show the inventory of a node
    Get {
        /// Node ID
        node_id: String,

        /// Output format
        #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}
