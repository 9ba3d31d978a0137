//! Agent behaviour bundles: settings, parameters, monitoring and watchdogs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Bundle, BundleKind, KeyValue};

/// Agent settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SettingsBundle {
    #[serde(default)]
    pub metrics: bool,
    #[serde(default)]
    pub reports: bool,
    #[serde(default)]
    pub remoteconsole: bool,
    #[serde(default)]
    pub software_inventory: bool,
    #[serde(default)]
    pub process_inventory: bool,
    /// Agent run interval in minutes, as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agentinterval: Option<String>,
}

/// Global parameters and secrets usable in templates
///
/// Secret values are write-only: in API responses they are replaced by a
/// reference to the stored secret.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ParametersBundle {
    #[serde(default)]
    pub parameters: Vec<KeyValue>,
    #[serde(default)]
    pub secrets: Vec<KeyValue>,
}

impl ParametersBundle {
    /// Secret key to stored secret reference, as found in an API response
    pub fn secret_references(&self) -> BTreeMap<String, String> {
        self.secrets
            .iter()
            .map(|s| (s.key.clone(), s.value.clone()))
            .collect()
    }
}

/// Reboot the device after this many failed connection attempts
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ConnectivityWatchdogBundle {
    pub threshold: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MetricsMonitorBundle {
    #[serde(default)]
    pub metrics: Vec<MetricThreshold>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MetricThreshold {
    /// Metric selector, e.g. "cpu:user" or "filesystem:use:/"
    pub value: String,
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProcessWatchBundle {
    #[serde(default)]
    pub processes: Vec<WatchedProcess>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WatchedProcess {
    pub name: String,
    pub policy: ProcessPolicy,
    /// Command that restores the expected state
    pub command: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessPolicy {
    Present,
    Absent,
}

/// RAUC update bundle to install
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RaucBundle {
    pub rauc_bundle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_condition: Option<String>,
}

impl Bundle for SettingsBundle {
    const KIND: BundleKind = BundleKind::Settings;
}

impl Bundle for ParametersBundle {
    const KIND: BundleKind = BundleKind::Parameters;
}

impl Bundle for ConnectivityWatchdogBundle {
    const KIND: BundleKind = BundleKind::ConnectivityWatchdog;
}

impl Bundle for MetricsMonitorBundle {
    const KIND: BundleKind = BundleKind::MetricsMonitor;
}

impl Bundle for ProcessWatchBundle {
    const KIND: BundleKind = BundleKind::ProcessWatch;
}

impl Bundle for RaucBundle {
    const KIND: BundleKind = BundleKind::Rauc;
}
