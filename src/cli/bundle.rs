//! Bundle command arguments

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::common::{DocumentFormat, TargetArgs};
use crate::qbee::bundles::BundleKind;

/// Subcommands of 'bundle'
#[derive(Subcommand, Debug)]
pub enum BundleCommand {
    /// Replace a bundle on a tag or node and commit
    Set(BundleSetArgs),

    /// Reset a bundle on a tag or node to what it inherits, and commit
    #[command(visible_alias = "reset")]
    Clear(BundleClearArgs),

    /// Show a bundle from the committed configuration
    Get(BundleGetArgs),

    /// List the supported bundle kinds
    Kinds,
}

/// Arguments for 'bundle set'
#[derive(Parser, Debug)]
pub struct BundleSetArgs {
    /// Bundle kind
    #[arg(value_enum)]
    pub kind: BundleKind,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Payload file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Inherit the configuration of ancestor groups
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub extend: bool,

    /// Commit message (generated if omitted)
    #[arg(short = 'm', long)]
    pub message: Option<String>,
}

/// Arguments for 'bundle clear'
#[derive(Parser, Debug)]
pub struct BundleClearArgs {
    /// Bundle kind
    #[arg(value_enum)]
    pub kind: BundleKind,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Commit message (generated if omitted)
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'bundle get'
#[derive(Parser, Debug)]
pub struct BundleGetArgs {
    /// Bundle kind
    #[arg(value_enum)]
    pub kind: BundleKind,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = DocumentFormat::Yaml)]
    pub output: DocumentFormat,
}

impl BundleCommand {
    /// Target selector of the command, if it takes one
    pub fn target_args(&self) -> Option<&TargetArgs> {
        match self {
            BundleCommand::Set(args) => Some(&args.target),
            BundleCommand::Clear(args) => Some(&args.target),
            BundleCommand::Get(args) => Some(&args.target),
            BundleCommand::Kinds => None,
        }
    }
}
