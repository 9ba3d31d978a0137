//! Inventory command handlers

use crate::cli::{Cli, InventoryCommand};
use crate::output::output_inventory;
use crate::qbee::QbeeClient;
use crate::ui::{create_spinner, finish_spinner};

/// Run the inventory command
pub async fn run_inventory_command(
    client: &QbeeClient,
    cli: &Cli,
    command: &InventoryCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let InventoryCommand::Get { node_id, output } = command;

    let spinner = create_spinner(&format!("Fetching inventory of '{}'...", node_id), cli.batch);
    let result = client.get_inventory(node_id).await;
    finish_spinner(spinner);

    output_inventory(&result?, output);
    Ok(())
}
