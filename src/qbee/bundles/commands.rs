//! Bundle command handlers

use log::debug;

use crate::cli::{BundleClearArgs, BundleCommand, BundleGetArgs, BundleSetArgs, Cli};
use crate::output::{output_bundle_entry, output_bundle_kinds};
use crate::qbee::{load_payload, QbeeClient};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::{
    commit_message, Bundle, BundleKind, ConnectivityWatchdogBundle, DockerContainersBundle,
    FileDistributionBundle, FirewallBundle, MetricsMonitorBundle, ParametersBundle,
    PasswordBundle, PodmanContainersBundle, ProcessWatchBundle, RaucBundle, SettingsBundle,
    SoftwareManagementBundle, SshKeysBundle, UsersBundle,
};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Evaluate `$body` with `$B` bound to the payload type of `$kind`
macro_rules! with_bundle_type {
    ($kind:expr, $B:ident => $body:expr) => {
        match $kind {
            BundleKind::Firewall => {
                type $B = FirewallBundle;
                $body
            }
            BundleKind::FileDistribution => {
                type $B = FileDistributionBundle;
                $body
            }
            BundleKind::SoftwareManagement => {
                type $B = SoftwareManagementBundle;
                $body
            }
            BundleKind::Password => {
                type $B = PasswordBundle;
                $body
            }
            BundleKind::Users => {
                type $B = UsersBundle;
                $body
            }
            BundleKind::SshKeys => {
                type $B = SshKeysBundle;
                $body
            }
            BundleKind::Settings => {
                type $B = SettingsBundle;
                $body
            }
            BundleKind::Parameters => {
                type $B = ParametersBundle;
                $body
            }
            BundleKind::MetricsMonitor => {
                type $B = MetricsMonitorBundle;
                $body
            }
            BundleKind::ProcessWatch => {
                type $B = ProcessWatchBundle;
                $body
            }
            BundleKind::Rauc => {
                type $B = RaucBundle;
                $body
            }
            BundleKind::DockerContainers => {
                type $B = DockerContainersBundle;
                $body
            }
            BundleKind::PodmanContainers => {
                type $B = PodmanContainersBundle;
                $body
            }
            BundleKind::ConnectivityWatchdog => {
                type $B = ConnectivityWatchdogBundle;
                $body
            }
        }
    };
}

/// Run the bundle command
pub async fn run_bundle_command(
    client: &QbeeClient,
    cli: &Cli,
    command: &BundleCommand,
) -> CommandResult {
    match command {
        BundleCommand::Set(args) => with_bundle_type!(args.kind, B => set_bundle::<B>(client, cli, args).await),
        BundleCommand::Clear(args) => with_bundle_type!(args.kind, B => clear_bundle::<B>(client, cli, args).await),
        BundleCommand::Get(args) => with_bundle_type!(args.kind, B => get_bundle::<B>(client, args).await),
        BundleCommand::Kinds => {
            output_bundle_kinds();
            Ok(())
        }
    }
}

async fn set_bundle<B: Bundle>(client: &QbeeClient, cli: &Cli, args: &BundleSetArgs) -> CommandResult {
    let target = args.target.resolve()?;
    let bundle: B = load_payload(&args.file)?;
    debug!("Loaded {} payload: {:?}", B::FORM_TYPE, bundle);

    let message = args
        .message
        .clone()
        .unwrap_or_else(|| commit_message("set", B::FORM_TYPE, &target));

    let spinner = create_spinner(
        &format!("Applying {} to {}...", B::FORM_TYPE, target),
        cli.batch,
    );
    let result = client
        .write_bundle(&target, &bundle, args.extend, &message)
        .await;
    finish_spinner(spinner);
    let applied = result?;

    println!(
        "✓ Applied {} to {} (change {}, commit {})",
        B::FORM_TYPE,
        target,
        applied.change.short_sha(),
        applied.commit.sha.as_deref().unwrap_or("none")
    );
    Ok(())
}

async fn clear_bundle<B: Bundle>(
    client: &QbeeClient,
    cli: &Cli,
    args: &BundleClearArgs,
) -> CommandResult {
    let target = args.target.resolve()?;

    let prompt = format!(
        "Reset {} on {} to the inherited configuration?",
        B::FORM_TYPE,
        target
    );
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let message = args
        .message
        .clone()
        .unwrap_or_else(|| commit_message("reset", B::FORM_TYPE, &target));

    let spinner = create_spinner(
        &format!("Resetting {} on {}...", B::FORM_TYPE, target),
        cli.batch,
    );
    let result = client.clear_bundle::<B>(&target, &message).await;
    finish_spinner(spinner);
    result?;

    println!("✓ Reset {} on {}", B::FORM_TYPE, target);
    Ok(())
}

async fn get_bundle<B: Bundle>(client: &QbeeClient, args: &BundleGetArgs) -> CommandResult {
    let target = args.target.resolve()?;

    match client.get_bundle::<B>(&target).await? {
        Some(entry) => output_bundle_entry(&target, &entry, &args.output),
        None => println!("{} is not configured on {}", B::FORM_TYPE, target),
    }
    Ok(())
}
