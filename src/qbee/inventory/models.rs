//! Node inventory data models

use serde::{Deserialize, Serialize};

/// Inventory reported by a node's agent
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NodeInventory {
    pub node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_ip: Option<String>,
    /// Unix timestamp of the last report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reported: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemInfo>,
    /// Remaining inventory sections, kept as reported
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SystemInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
}

impl NodeInventory {
    pub fn last_reported_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_reported
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
    }

    /// Summary rows for table output
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let system = self.system.clone().unwrap_or_default();
        let text = |v: Option<String>| v.unwrap_or_default();

        vec![
            ("Node ID", self.node_id.clone()),
            ("Hostname", text(system.hostname)),
            ("OS", text(system.os_type)),
            ("Flavor", text(system.flavor)),
            ("Kernel", text(system.kernel_release)),
            ("Architecture", text(system.architecture)),
            ("Agent", text(system.agent_version)),
            ("Public IP", text(self.pub_ip.clone())),
            (
                "Last Reported",
                self.last_reported_at()
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_default(),
            ),
        ]
    }
}
