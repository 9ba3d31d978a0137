//! Group tree command handlers

use log::debug;

use crate::cli::{Cli, GroupTreeCommand};
use crate::output::output_grouptree_node;
use crate::qbee::QbeeClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run the grouptree command
pub async fn run_grouptree_command(
    client: &QbeeClient,
    cli: &Cli,
    command: &GroupTreeCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        GroupTreeCommand::Show { node_id, output } => {
            let spinner = create_spinner(&format!("Fetching node '{}'...", node_id), cli.batch);
            let result = client.get_grouptree_node(node_id).await;
            finish_spinner(spinner);

            match result? {
                Some(node) => output_grouptree_node(&node, output),
                None => return Err(format!("Node '{}' not found", node_id).into()),
            }
        }
        GroupTreeCommand::Create(args) => {
            let title = args.title.as_deref().unwrap_or(&args.node_id);
            debug!(
                "Creating group '{}' ({}) under '{}'",
                args.node_id, title, args.parent
            );

            client
                .create_group(&args.node_id, &args.parent, title)
                .await?;
            println!("✓ Created group '{}' under '{}'", args.node_id, args.parent);
        }
        GroupTreeCommand::Rename { node_id, title } => {
            client.rename_node(node_id, title).await?;
            println!("✓ Renamed '{}' to '{}'", node_id, title);
        }
        GroupTreeCommand::Move { node_id, parent } => {
            client.move_node(node_id, parent).await?;
            println!("✓ Moved '{}' under '{}'", node_id, parent);
        }
        GroupTreeCommand::Delete { node_id, yes } => {
            let prompt = format!("Delete node '{}' from the group tree?", node_id);
            if !confirm_action(&prompt, *yes, cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }

            client.delete_node(node_id).await?;
            println!("✓ Deleted node '{}'", node_id);
        }
        GroupTreeCommand::Tags { node_id, tags } => {
            let tags: Vec<String> = tags
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();

            client.set_node_tags(node_id, &tags).await?;
            if tags.is_empty() {
                println!("✓ Removed all tags from '{}'", node_id);
            } else {
                println!("✓ Set tag(s) [{}] on '{}'", tags.join(", "), node_id);
            }
        }
    }

    Ok(())
}
