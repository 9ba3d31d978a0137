//! Bootstrap keys used to register new devices

mod api;
pub mod commands;
mod models;

pub use commands::run_bootstrap_key_command;
pub use models::{BootstrapKey, BootstrapKeyRequest};
