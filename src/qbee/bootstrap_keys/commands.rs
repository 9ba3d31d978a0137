//! Bootstrap key command handlers

use crate::cli::{BootstrapKeyCommand, Cli};
use crate::output::output_bootstrap_keys;
use crate::qbee::QbeeClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::models::BootstrapKeyRequest;

/// Run the bootstrap-key command
pub async fn run_bootstrap_key_command(
    client: &QbeeClient,
    cli: &Cli,
    command: &BootstrapKeyCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        BootstrapKeyCommand::Ls { output } => {
            let spinner = create_spinner("Fetching bootstrap keys...", cli.batch);
            let result = client.list_bootstrap_keys().await;
            finish_spinner(spinner);

            output_bootstrap_keys(&result?, output);
        }
        BootstrapKeyCommand::Create { group, auto_accept } => {
            let key = client
                .create_bootstrap_key(&BootstrapKeyRequest {
                    group_id: Some(group.clone()),
                    auto_accept: Some(*auto_accept),
                })
                .await?;
            println!("✓ Created bootstrap key {}", key.id);
        }
        BootstrapKeyCommand::Update {
            id,
            group,
            auto_accept,
        } => {
            client
                .update_bootstrap_key(
                    id,
                    &BootstrapKeyRequest {
                        group_id: group.clone(),
                        auto_accept: *auto_accept,
                    },
                )
                .await?;
            println!("✓ Updated bootstrap key {}", id);
        }
        BootstrapKeyCommand::Delete { id, yes } => {
            let key = client
                .get_bootstrap_key(id)
                .await?
                .ok_or_else(|| format!("Bootstrap key '{}' not found", id))?;

            let prompt = format!(
                "Delete bootstrap key '{}' (group {})? Devices can no longer register with it.",
                key.id,
                key.group_id.as_deref().unwrap_or("-")
            );
            if !confirm_action(&prompt, *yes, cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }

            client.delete_bootstrap_key(id).await?;
            println!("✓ Deleted bootstrap key {}", id);
        }
    }

    Ok(())
}
