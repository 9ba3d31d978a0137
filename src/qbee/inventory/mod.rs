//! Node inventory

mod api;
pub mod commands;
mod models;

pub use commands::run_inventory_command;
pub use models::{NodeInventory, SystemInfo};
