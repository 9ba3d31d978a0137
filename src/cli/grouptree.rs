//! Group tree command arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Subcommands of 'grouptree'
#[derive(Subcommand, Debug)]
pub enum GroupTreeCommand {
    /// Show a node and its children
    Show {
        /// Node ID
        node_id: String,

        /// Output format
        #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Create a group
    Create(CreateGroupArgs),

    /// Rename a node
    Rename {
        /// Node ID
        node_id: String,

        /// New title
        #[arg(long)]
        title: String,
    },

    /// Move a node under another group
    Move {
        /// Node ID
        node_id: String,

        /// New parent node ID
        #[arg(long)]
        parent: String,
    },

    /// Delete a node
    Delete {
        /// Node ID
        node_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },

    /// Replace the tags of a node
    Tags {
        /// Node ID
        node_id: String,

        /// Tags (comma-separated); empty removes all tags
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        tags: Vec<String>,
    },
}

/// Arguments for 'grouptree create'
#[derive(Parser, Debug)]
pub struct CreateGroupArgs {
    /// Node ID of the new group
    pub node_id: String,

    /// Parent node ID
    #[arg(long, default_value = "root")]
    pub parent: String,

    /// Display title (defaults to the node ID)
    #[arg(long)]
    pub title: Option<String>,
}
