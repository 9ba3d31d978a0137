//! Roles

mod api;
pub mod commands;
mod models;

pub use commands::run_role_command;
pub use models::{Role, RolePolicy};
