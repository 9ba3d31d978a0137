//! Role data models

use serde::{Deserialize, Serialize};

/// A role: a named set of permission policies
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Role {
    /// Assigned by the API; ignored when creating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub policies: Vec<RolePolicy>,
}

/// One permission granted by a role, optionally scoped to resources
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RolePolicy {
    pub permission: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl Role {
    /// Copy without the id, as sent on create and update
    pub fn definition(&self) -> Role {
        Role {
            id: None,
            ..self.clone()
        }
    }
}
