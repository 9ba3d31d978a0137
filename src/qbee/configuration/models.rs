//! Active configuration data models

use serde::{Deserialize, Serialize};

use crate::qbee::bundles::{BundleData, BundleKind};
use crate::qbee::Target;

/// Response of `GET /config/{tag|node}/{id}`
#[derive(Deserialize, Debug)]
pub(crate) struct ConfigurationResponse {
    pub config: ActiveConfiguration,
    #[serde(default)]
    pub status: Option<String>,
}

/// Committed configuration of a tag or node
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ActiveConfiguration {
    pub id: String,
    #[serde(rename = "type")]
    pub target_type: String,
    #[serde(default)]
    pub commit_id: Option<String>,
    /// Unix timestamp of the commit
    #[serde(default)]
    pub commit_created: Option<i64>,
    /// Form types configured on this target
    #[serde(default)]
    pub bundles: Vec<String>,
    #[serde(default)]
    pub bundle_data: BundleData,
}

impl ActiveConfiguration {
    pub fn target(&self) -> Option<Target> {
        match self.target_type.as_str() {
            "tag" => Target::tag(&self.id).ok(),
            "node" => Target::node(&self.id).ok(),
            _ => None,
        }
    }

    /// Known bundle kinds listed as configured
    pub fn configured_kinds(&self) -> Vec<BundleKind> {
        self.bundles
            .iter()
            .filter_map(|b| BundleKind::from_form_type(b))
            .collect()
    }

    pub fn commit_created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.commit_created
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
    }
}
