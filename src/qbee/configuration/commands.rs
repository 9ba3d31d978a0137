//! Active configuration command handlers

use log::debug;

use crate::cli::{Cli, ConfigCommand};
use crate::error::Result;
use crate::output::output_configurations;
use crate::qbee::{collect_target_results, fetch_for_targets, log_completion, QbeeClient, Target};
use crate::ui::{create_spinner, finish_spinner_with_status};

/// Run the config command
pub async fn run_config_command(
    client: &QbeeClient,
    cli: &Cli,
    command: &ConfigCommand,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let ConfigCommand::Get(args) = command;

    let targets = args
        .targets
        .iter()
        .map(|id| Target::parse_import_id(id))
        .collect::<Result<Vec<_>>>()?;
    debug!("Fetching configuration of {} target(s)", targets.len());

    let spinner = create_spinner(
        &format!("Fetching configuration of {} target(s)...", targets.len()),
        cli.batch,
    );

    let results = fetch_for_targets(targets, |target| async move {
        let result = client.get_configuration(&target).await;
        result.map_err(|e| (target, e))
    })
    .await;

    let (configs, had_errors) = collect_target_results(results, &spinner, "configuration");
    finish_spinner_with_status(spinner, &configs, had_errors);

    if !configs.is_empty() {
        output_configurations(&configs, &args.output);
    }
    log_completion(had_errors);

    if had_errors {
        return Err("Failed to fetch the configuration of one or more targets".into());
    }
    Ok(())
}
