//! File manager command handlers

use crate::cli::{Cli, FilesCommand};
use crate::output::output_files;
use crate::qbee::QbeeClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run the files command
pub async fn run_files_command(
    client: &QbeeClient,
    cli: &Cli,
    command: &FilesCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        FilesCommand::Ls { path, output } => {
            let spinner = create_spinner(&format!("Listing '{}'...", path), cli.batch);
            let result = client.list_files(path).await;
            finish_spinner(spinner);

            output_files(&result?, output);
        }
        FilesCommand::Upload(args) => {
            let spinner = create_spinner(
                &format!("Uploading '{}'...", args.file.display()),
                cli.batch,
            );
            let result = client.upload_file(&args.file, &args.dest).await;
            finish_spinner(spinner);

            println!("✓ Uploaded {}", result?);
        }
        FilesCommand::Rm { path, yes } => {
            let prompt = format!("Delete '{}' from the file manager?", path);
            if !confirm_action(&prompt, *yes, cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }

            client.delete_file(path).await?;
            println!("✓ Deleted {}", path);
        }
        FilesCommand::Mkdir { name, parent } => {
            let created = client.create_directory(parent, name).await?;
            println!("✓ Created directory {}", created);
        }
    }

    Ok(())
}
