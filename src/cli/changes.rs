//! Uncommitted change command arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Subcommands of 'changes'
#[derive(Subcommand, Debug)]
pub enum ChangesCommand {
    /// List uncommitted changes
    #[command(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Commit every uncommitted change of the account
    Commit {
        /// Commit message
        #[arg(short = 'm', long)]
        message: String,
    },

    /// Delete one uncommitted change
    Discard(DiscardArgs),

    /// Delete all uncommitted changes
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },
}

/// Arguments for 'changes discard'
#[derive(Parser, Debug)]
pub struct DiscardArgs {
    /// Content hash of the change
    pub sha: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
