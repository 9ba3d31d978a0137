//! Bootstrap key data models

use serde::{Deserialize, Serialize};

/// Key devices present when they first connect
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BootstrapKey {
    pub id: String,
    /// Group tree node new devices are placed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default)]
    pub auto_accept: bool,
    /// Unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

/// Body of `POST /bootstrapkey` and `PATCH /bootstrapkey/{id}`
///
/// Unset fields are left out, so a PATCH only touches what is given.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct BootstrapKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_accept: Option<bool>,
}

impl BootstrapKeyRequest {
    pub fn is_empty(&self) -> bool {
        self.group_id.is_none() && self.auto_accept.is_none()
    }
}
