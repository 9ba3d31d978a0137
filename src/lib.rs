//! qbeectl - Manage qbee.io device configuration
//!
//! A client library and CLI for the qbee.io device management API.
//!
//! # Features
//!
//! - Stage, commit and roll back configuration changes
//! - Typed configuration bundles (firewall, file distribution, users, ...)
//! - Group tree, file manager, roles, bootstrap keys and inventory
//! - Multiple output formats (table, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Apply a firewall bundle to a tag
//! qbeectl bundle set firewall --tag production -f firewall.yaml
//!
//! # Read it back from the committed configuration
//! qbeectl bundle get firewall --id tag:production
//!
//! # Show pending changes
//! qbeectl changes list
//!
//! # Reset a bundle to what the node inherits
//! qbeectl bundle clear settings --node 8f3c... -y
//! ```
//!
//! Commits are account-wide: committing applies every change staged by
//! any client of the account, not just the one that was just written.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod qbee;
pub mod ui;

pub use cli::{BundleCommand, Cli, Command, DocumentFormat, OutputFormat, TargetArgs};
pub use error::{QbeeError, Result};
pub use qbee::{
    run_bootstrap_key_command, run_bundle_command, run_changes_command, run_config_command,
    run_files_command, run_grouptree_command, run_inventory_command, run_role_command,
    stage_and_commit, ActiveConfiguration, Bundle, BundleEntry, BundleKind, ChangeProtocol,
    Credentials, CredentialsResolver, QbeeClient, Target, TokenCache,
};
