//! Active configuration command arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Subcommands of 'config'
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the committed configuration of one or more tags/nodes
    Get(ConfigGetArgs),
}

/// Arguments for 'config get'
#[derive(Parser, Debug)]
pub struct ConfigGetArgs {
    /// Targets as 'tag:<name>' or 'node:<id>'
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
