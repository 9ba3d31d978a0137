//! File manager command arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::common::OutputFormat;

/// Subcommands of 'files'
#[derive(Subcommand, Debug)]
pub enum FilesCommand {
    /// List a directory of the file manager
    Ls {
        /// Directory path
        #[arg(default_value = "/")]
        path: String,

        /// Output format
        #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Upload a local file
    Upload(UploadArgs),

    /// Delete a file or an empty directory
    Rm {
        /// Path in the file manager
        path: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },

    /// Create a directory
    Mkdir {
        /// Name of the new directory
        name: String,

        /// Parent directory
        #[arg(long, default_value = "/")]
        parent: String,
    },
}

/// Arguments for 'files upload'
#[derive(Parser, Debug)]
pub struct UploadArgs {
    /// Local file to upload
    pub file: PathBuf,

    /// Destination directory in the file manager
    #[arg(long, default_value = "/")]
    pub dest: String,
}
