//! Configuration bundles
//!
//! Each bundle is a typed payload with a fixed form type. Writes, resets and
//! reads go through the generic operations in `service`, which stage and
//! commit changes with the shared protocol.

mod accounts;
mod agent;
pub mod commands;
mod containers;
mod file_distribution;
mod firewall;
mod service;
mod software_management;

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QbeeError, Result};
use crate::qbee::changes::AppliedChange;

pub use accounts::{
    PasswordBundle, PasswordUser, SshKeyUser, SshKeysBundle, UserAction, UserItem, UsersBundle,
};
pub use agent::{
    ConnectivityWatchdogBundle, MetricThreshold, MetricsMonitorBundle, ParametersBundle,
    ProcessPolicy, ProcessWatchBundle, RaucBundle, SettingsBundle, WatchedProcess,
};
pub use commands::run_bundle_command;
pub use containers::{
    DockerContainer, DockerContainersBundle, PodmanContainer, PodmanContainersBundle,
    RegistryAuth,
};
pub use file_distribution::{FileDistributionBundle, FileSet, FileTemplate};
pub use firewall::{
    FilterTable, FirewallBundle, FirewallChain, FirewallPolicy, FirewallProtocol, FirewallRule,
    FirewallTables, FirewallTarget,
};
pub use service::commit_message;
pub use software_management::{ConfigFile, SoftwareManagementBundle, SoftwarePackage};

/// A typed configuration bundle
pub trait Bundle: Serialize + DeserializeOwned + fmt::Debug {
    const KIND: BundleKind;

    /// Form type sent with every change of this bundle
    const FORM_TYPE: &'static str = Self::KIND.form_type();

    /// Decode this bundle's entry out of a target's active configuration
    ///
    /// Only this bundle's entry is decoded; malformed entries of other
    /// bundles do not affect it.
    fn select(data: &BundleData) -> Result<Option<BundleEntry<Self>>> {
        data.decode(Self::FORM_TYPE)
    }
}

/// Every bundle type the client knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum BundleKind {
    Firewall,
    FileDistribution,
    SoftwareManagement,
    Password,
    Users,
    SshKeys,
    Settings,
    Parameters,
    MetricsMonitor,
    ProcessWatch,
    Rauc,
    DockerContainers,
    PodmanContainers,
    ConnectivityWatchdog,
}

impl BundleKind {
    pub const fn form_type(&self) -> &'static str {
        match self {
            BundleKind::Firewall => "firewall",
            BundleKind::FileDistribution => "file_distribution",
            BundleKind::SoftwareManagement => "software_management",
            BundleKind::Password => "password",
            BundleKind::Users => "users",
            BundleKind::SshKeys => "sshkeys",
            BundleKind::Settings => "settings",
            BundleKind::Parameters => "parameters",
            BundleKind::MetricsMonitor => "metrics_monitor",
            BundleKind::ProcessWatch => "proc_watch",
            BundleKind::Rauc => "rauc",
            BundleKind::DockerContainers => "docker_containers",
            BundleKind::PodmanContainers => "podman_containers",
            BundleKind::ConnectivityWatchdog => "connectivity_watchdog",
        }
    }

    pub fn all() -> &'static [BundleKind] {
        Self::value_variants()
    }

    pub fn from_form_type(form_type: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.form_type() == form_type)
    }
}

impl fmt::Display for BundleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form_type())
    }
}

/// Key/value pair used by parameters, secrets and template parameters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// A bundle as found in a target's active configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BundleEntry<B> {
    #[serde(default)]
    pub enabled: bool,
    /// Whether the target inherits this bundle from its ancestors
    #[serde(default)]
    pub extend: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub bundle: B,
}

/// Raw bundle entries of an active configuration, keyed by form type
///
/// Entries are decoded one at a time through `Bundle::select`. A missing or
/// null entry means the bundle is not configured.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct BundleData(serde_json::Map<String, serde_json::Value>);

impl BundleData {
    /// Whether an entry exists for `form_type`
    pub fn contains(&self, form_type: &str) -> bool {
        self.raw(form_type).is_some()
    }

    /// Undecoded entry for `form_type`
    pub fn raw(&self, form_type: &str) -> Option<&serde_json::Value> {
        self.0.get(form_type).filter(|value| !value.is_null())
    }

    /// Decode the entry for `form_type` as payload `B`
    pub fn decode<B: DeserializeOwned>(&self, form_type: &str) -> Result<Option<BundleEntry<B>>> {
        let Some(value) = self.raw(form_type) else {
            return Ok(None);
        };
        serde_json::from_value(value.clone()).map(Some).map_err(|e| {
            QbeeError::Json(format!("Failed to decode {} bundle: {}", form_type, e))
        })
    }
}

impl AppliedChange {
    /// The staged payload decoded as bundle `B`
    ///
    /// `None` when the change was for another bundle, was a reset, or the
    /// response carried no content.
    pub fn staged_bundle<B: Bundle>(&self) -> Result<Option<B>> {
        match self.change.content {
            Some(ref content) if content.formtype == B::FORM_TYPE && !content.is_reset() => {
                content.config_as::<B>().map(Some)
            }
            _ => Ok(None),
        }
    }
}
