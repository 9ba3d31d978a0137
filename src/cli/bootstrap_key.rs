//! Bootstrap key command arguments

use clap::{ArgAction, Subcommand};

use super::common::OutputFormat;

/// Subcommands of 'bootstrap-key'
#[derive(Subcommand, Debug)]
pub enum BootstrapKeyCommand {
    /// List bootstrap keys
    Ls {
        /// Output format
        #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Create a bootstrap key
    Create {
        /// Group new devices are placed in
        #[arg(long)]
        group: String,

        /// Accept devices without manual approval
        #[arg(long, default_value_t = false, action = ArgAction::Set)]
        auto_accept: bool,
    },

    /// Update a bootstrap key
    Update {
        /// Bootstrap key ID
        id: String,

        /// Group new devices are placed in
        #[arg(long)]
        group: Option<String>,

        /// Accept devices without manual approval
        #[arg(long, action = ArgAction::Set)]
        auto_accept: Option<bool>,
    },

    /// Delete a bootstrap key
    Delete {
        /// Bootstrap key ID
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },
}
