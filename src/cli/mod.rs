//! CLI argument parsing

mod bootstrap_key;
mod bundle;
mod changes;
mod common;
mod config;
mod files;
mod grouptree;
mod inventory;
mod role;

use clap::{Parser, Subcommand};

use crate::config::{defaults, host};
use crate::error::Result;
use crate::qbee::Target;

pub use bootstrap_key::BootstrapKeyCommand;
pub use bundle::{BundleClearArgs, BundleCommand, BundleGetArgs, BundleSetArgs};
pub use changes::{ChangesCommand, DiscardArgs};
pub use common::{DocumentFormat, OutputFormat, TargetArgs};
pub use config::{ConfigCommand, ConfigGetArgs};
pub use files::{FilesCommand, UploadArgs};
pub use grouptree::{CreateGroupArgs, GroupTreeCommand};
pub use inventory::InventoryCommand;
pub use role::RoleCommand;

/// qbee device management CLI
#[derive(Parser, Debug)]
#[command(name = "qbeectl")]
#[command(version)]
#[command(about = "Manage qbee.io device configuration", long_about = None)]
pub struct Cli {
    /// qbee API host
    #[arg(short = 'H', long, global = true, env = host::ENV_VAR, default_value = defaults::HOST)]
    pub host: String,

    /// Account email (overrides env vars and credentials file)
    #[arg(short = 'u', long, global = true)]
    pub username: Option<String>,

    /// Account password (overrides env vars and credentials file)
    #[arg(short = 'p', long, global = true)]
    pub password: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read the committed configuration of tags and nodes
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Write, reset and read configuration bundles
    #[command(subcommand)]
    Bundle(BundleCommand),

    /// Inspect, commit and discard uncommitted changes
    #[command(subcommand)]
    Changes(ChangesCommand),

    /// Manage the group tree
    #[command(subcommand, name = "grouptree", visible_alias = "gt")]
    GroupTree(GroupTreeCommand),

    /// Manage the file manager
    #[command(subcommand)]
    Files(FilesCommand),

    /// Manage roles
    #[command(subcommand)]
    Role(RoleCommand),

    /// Manage bootstrap keys
    #[command(subcommand, name = "bootstrap-key", visible_alias = "bk")]
    BootstrapKey(BootstrapKeyCommand),

    /// Read node inventory
    #[command(subcommand)]
    Inventory(InventoryCommand),
}

impl Command {
    /// Check arguments that can be validated without talking to the API
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Bundle(bundle) => {
                if let Some(target) = bundle.target_args() {
                    target.resolve()?;
                }
            }
            Command::Config(ConfigCommand::Get(args)) => {
                for id in &args.targets {
                    Target::parse_import_id(id)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
