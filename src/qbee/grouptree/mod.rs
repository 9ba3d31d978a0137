//! Group tree: the hierarchy of groups and devices

mod api;
pub mod commands;
mod models;

pub use commands::run_grouptree_command;
pub use models::{GroupTreeChange, GroupTreeNode, NodeType};
