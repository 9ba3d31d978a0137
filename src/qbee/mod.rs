//! qbee API client module
//!
//! This module provides functionality to interact with the qbee.io device
//! management API: the configuration change/commit protocol, typed bundles
//! and the resources that are edited directly.

mod auth;
pub mod bootstrap_keys;
pub mod bundles;
pub mod changes;
mod client;
pub mod configuration;
mod credentials;
pub mod files;
pub mod grouptree;
pub mod helpers;
pub mod inventory;
pub mod roles;
mod target;

use serde::Deserialize;

pub use auth::TokenCache;
pub use bootstrap_keys::{run_bootstrap_key_command, BootstrapKey, BootstrapKeyRequest};
pub use bundles::{run_bundle_command, Bundle, BundleEntry, BundleKind};
pub use changes::{run_changes_command, stage_and_commit, ChangeProtocol};
pub use client::QbeeClient;
pub use configuration::{run_config_command, ActiveConfiguration};
pub use credentials::{Credentials, CredentialsResolver};
pub use files::{run_files_command, FileEntry};
pub use grouptree::{run_grouptree_command, GroupTreeChange, GroupTreeNode};
pub use helpers::{collect_target_results, fetch_for_targets, load_payload, log_completion};
pub use inventory::{run_inventory_command, NodeInventory};
pub use roles::{run_role_command, Role};
pub use target::Target;

/// List envelope used by listing endpoints (shared across resources)
#[derive(Deserialize, Debug, Clone)]
pub struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}
