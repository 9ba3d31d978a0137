//! Output formatting module
//!
//! Handles different output formats: table, JSON, YAML

mod bootstrap_keys;
mod bundles;
mod changes;
mod common;
mod configuration;
mod files;
mod grouptree;
mod inventory;

pub use bootstrap_keys::output_bootstrap_keys;
pub use bundles::{output_bundle_entry, output_bundle_kinds};
pub use changes::{output_changes, output_commit_result};
pub use common::{print_document, print_json, print_yaml};
pub use configuration::output_configurations;
pub use files::output_files;
pub use grouptree::output_grouptree_node;
pub use inventory::output_inventory;
