//! Uncommitted change command handlers

use log::debug;

use crate::cli::{ChangesCommand, Cli};
use crate::output::{output_changes, output_commit_result};
use crate::qbee::QbeeClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run the changes command
pub async fn run_changes_command(
    client: &QbeeClient,
    cli: &Cli,
    command: &ChangesCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ChangesCommand::List { output } => {
            let spinner = create_spinner("Fetching uncommitted changes...", cli.batch);
            let result = client.list_uncommitted().await;
            finish_spinner(spinner);

            output_changes(&result?, output);
        }
        ChangesCommand::Commit { message } => {
            debug!("Committing with message '{}'", message);

            let spinner = create_spinner("Committing...", cli.batch);
            let result = client.commit(message).await;
            finish_spinner(spinner);

            output_commit_result(&result?);
        }
        ChangesCommand::Discard(args) => {
            let prompt = format!("Discard uncommitted change '{}'?", args.sha);
            if !confirm_action(&prompt, args.yes, cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }

            client.delete_uncommitted(&args.sha).await?;
            println!("✓ Discarded change {}", args.sha);
        }
        ChangesCommand::Clear { yes } => {
            let pending = client.list_uncommitted().await?;
            if pending.is_empty() {
                println!("No uncommitted changes");
                return Ok(());
            }

            let prompt = format!("Discard all {} uncommitted change(s)?", pending.len());
            if !confirm_action(&prompt, *yes, cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }

            client.clear_uncommitted().await?;
            println!("✓ Discarded {} change(s)", pending.len());
        }
    }

    Ok(())
}
