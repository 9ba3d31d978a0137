//! Active configuration of tags and nodes

mod api;
pub mod commands;
mod models;

pub use commands::run_config_command;
pub use models::ActiveConfiguration;
