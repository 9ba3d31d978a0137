//! Role command handlers

use crate::cli::{Cli, RoleCommand};
use crate::output::print_document;
use crate::qbee::{load_payload, QbeeClient};
use crate::ui::confirm_action;

use super::models::Role;

/// Run the role command
pub async fn run_role_command(
    client: &QbeeClient,
    cli: &Cli,
    command: &RoleCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        RoleCommand::Get { id, output } => match client.get_role(id).await? {
            Some(role) => print_document(&role, output),
            None => return Err(format!("Role '{}' not found", id).into()),
        },
        RoleCommand::Create { file } => {
            let role: Role = load_payload(file)?;
            let created = client.create_role(&role).await?;
            println!(
                "✓ Created role '{}' ({})",
                created.name,
                created.id.as_deref().unwrap_or("no id")
            );
        }
        RoleCommand::Update { id, file } => {
            let role: Role = load_payload(file)?;
            let updated = client.update_role(id, &role).await?;
            println!("✓ Updated role '{}' ({})", updated.name, id);
        }
        RoleCommand::Delete { id, yes } => {
            let prompt = format!("Delete role '{}'?", id);
            if !confirm_action(&prompt, *yes, cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }

            client.delete_role(id).await?;
            println!("✓ Deleted role {}", id);
        }
    }

    Ok(())
}
