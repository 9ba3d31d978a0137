//! qbeectl - Main entry point

use clap::Parser;
use log::{debug, info};

use qbeectl::output::output_bundle_kinds;
use qbeectl::{
    run_bootstrap_key_command, run_bundle_command, run_changes_command, run_config_command,
    run_files_command, run_grouptree_command, run_inventory_command, run_role_command, BundleCommand,
    Cli, Command, CredentialsResolver, QbeeClient,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting qbeectl v{}", env!("CARGO_PKG_VERSION"));
    debug!("Host: {}, batch: {}", cli.host, cli.batch);

    // Reject bad selectors before asking for credentials
    cli.command.validate()?;

    // Offline commands
    if let Command::Bundle(BundleCommand::Kinds) = cli.command {
        output_bundle_kinds();
        return Ok(());
    }

    let credentials =
        CredentialsResolver::new().resolve(cli.username.as_deref(), cli.password.as_deref())?;
    let client = QbeeClient::new(credentials, cli.host.clone());

    match &cli.command {
        Command::Config(command) => run_config_command(&client, &cli, command).await,
        Command::Bundle(command) => run_bundle_command(&client, &cli, command).await,
        Command::Changes(command) => run_changes_command(&client, &cli, command).await,
        Command::GroupTree(command) => run_grouptree_command(&client, &cli, command).await,
        Command::Files(command) => run_files_command(&client, &cli, command).await,
        Command::Role(command) => run_role_command(&client, &cli, command).await,
        Command::BootstrapKey(command) => run_bootstrap_key_command(&client, &cli, command).await,
        Command::Inventory(command) => run_inventory_command(&client, &cli, command).await,
    }
}
