//! Configuration changes: stage, commit, list and roll back

mod api;
pub mod commands;
mod models;
mod protocol;

pub use commands::run_changes_command;
pub use models::{
    AppliedChange, Change, ChangeConfig, ChangeContent, ChangeRequest, CommitRequest,
    CommitResult,
};
pub use protocol::{stage_and_commit, ChangeProtocol};
