//! File manager

mod api;
pub mod commands;
mod models;

pub use commands::run_files_command;
pub use models::{join_path, FileEntry};
