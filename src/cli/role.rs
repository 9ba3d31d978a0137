//! Role command arguments

use clap::Subcommand;
use std::path::PathBuf;

use super::common::DocumentFormat;

/// Subcommands of 'role'
#[derive(Subcommand, Debug)]
pub enum RoleCommand {
    /// Show a role
    Get {
        /// Role ID
        id: String,

        /// Output format
        #[arg(short = 'o', long = "output", value_enum, default_value_t = DocumentFormat::Yaml)]
        output: DocumentFormat,
    },

    /// Create a role from a JSON/YAML definition
    Create {
        /// Role definition file
        #[arg(short = 'f', long)]
        file: PathBuf,
    },

    /// Replace a role from a JSON/YAML definition
    Update {
        /// Role ID
        id: String,

        /// Role definition file
        #[arg(short = 'f', long)]
        file: PathBuf,
    },

    /// Delete a role
    Delete {
        /// Role ID
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },
}
