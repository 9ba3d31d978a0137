//! Configuration change data models

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::{QbeeError, Result};
use crate::qbee::Target;

/// `config` object of a staged change
///
/// Bundle fields are flattened next to the common flags. A reset carries no
/// bundle fields at all.
#[derive(Serialize, Debug)]
pub struct ChangeConfig<'a, C> {
    pub version: &'static str,
    pub enabled: bool,
    pub reset_to_group: bool,
    #[serde(flatten)]
    pub bundle: Option<&'a C>,
}

/// Body of `POST /change`
#[derive(Serialize, Debug)]
pub struct ChangeRequest<'a, C> {
    #[serde(flatten)]
    pub target: &'a Target,
    pub formtype: &'a str,
    pub config: ChangeConfig<'a, C>,
    pub extend: bool,
}

impl<'a, C: Serialize> ChangeRequest<'a, C> {
    /// Stage `bundle` as the configuration of `formtype` on `target`
    pub fn write(target: &'a Target, formtype: &'a str, bundle: &'a C, extend: bool) -> Self {
        Self {
            target,
            formtype,
            config: ChangeConfig {
                version: api::CONFIG_VERSION,
                enabled: true,
                reset_to_group: false,
                bundle: Some(bundle),
            },
            extend,
        }
    }

    /// Stage a reset of `formtype` on `target` back to what it inherits
    pub fn reset(target: &'a Target, formtype: &'a str) -> Self {
        Self {
            target,
            formtype,
            config: ChangeConfig {
                version: api::CONFIG_VERSION,
                enabled: true,
                reset_to_group: true,
                bundle: None,
            },
            extend: true,
        }
    }

    pub fn is_reset(&self) -> bool {
        self.config.reset_to_group
    }
}

/// A staged, uncommitted change as returned by the API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Change {
    #[serde(default)]
    pub id: Option<String>,
    /// Content hash identifying the change
    pub sha: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Unix timestamp
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub content: Option<ChangeContent>,
}

impl Change {
    pub fn short_sha(&self) -> &str {
        self.sha.get(..8).unwrap_or(&self.sha)
    }

    pub fn formtype(&self) -> &str {
        self.content
            .as_ref()
            .map(|c| c.formtype.as_str())
            .unwrap_or("unknown")
    }

    pub fn target(&self) -> Option<Target> {
        self.content.as_ref().and_then(|c| c.target())
    }
}

/// Echo of the staged payload inside a `Change`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChangeContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub formtype: String,
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub extend: bool,
}

impl ChangeContent {
    pub fn target(&self) -> Option<Target> {
        Target::from_parts(self.tag.as_deref(), self.node_id.as_deref()).ok()
    }

    pub fn is_reset(&self) -> bool {
        self.config["reset_to_group"].as_bool().unwrap_or(false)
    }

    /// Decode the staged config into a typed bundle payload
    pub fn config_as<C: DeserializeOwned>(&self) -> Result<C> {
        serde_json::from_value(self.config.clone()).map_err(|e| {
            QbeeError::Json(format!(
                "Failed to decode staged '{}' configuration: {}",
                self.formtype, e
            ))
        })
    }
}

/// Body of `POST /commit`
#[derive(Serialize, Debug)]
pub struct CommitRequest<'a> {
    pub action: &'static str,
    pub message: &'a str,
}

impl<'a> CommitRequest<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            action: api::COMMIT_ACTION,
            message,
        }
    }
}

/// Outcome of a commit
///
/// `changes` lists what was applied. When nothing was pending the API
/// answers with a `result` marker and no changes.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CommitResult {
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub changes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CommitResult {
    /// True when the commit applied nothing
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// A change that was staged and committed
#[derive(Debug, Clone)]
pub struct AppliedChange {
    pub change: Change,
    pub commit: CommitResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Example {
        threshold: String,
    }

    #[test]
    fn test_write_request_shape() {
        let target = Target::Tag("t1".to_string());
        let bundle = Example {
            threshold: "5".to_string(),
        };
        let request = ChangeRequest::write(&target, "connectivity_watchdog", &bundle, false);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "tag": "t1",
                "formtype": "connectivity_watchdog",
                "config": {
                    "version": "v1",
                    "enabled": true,
                    "reset_to_group": false,
                    "threshold": "5"
                },
                "extend": false
            })
        );
    }

    #[test]
    fn test_reset_request_has_no_bundle_fields() {
        let target = Target::Node("node-1".to_string());
        let request = ChangeRequest::<Example>::reset(&target, "firewall");

        assert!(request.is_reset());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "node_id": "node-1",
                "formtype": "firewall",
                "config": {
                    "version": "v1",
                    "enabled": true,
                    "reset_to_group": true
                },
                "extend": true
            })
        );
    }

    #[test]
    fn test_change_deserialize() {
        let change: Change = serde_json::from_value(serde_json::json!({
            "id": "5f1c",
            "sha": "abc123def456",
            "status": "new",
            "created": 1700000000,
            "content": {
                "tag": "t1",
                "formtype": "connectivity_watchdog",
                "config": {"version": "v1", "enabled": true, "threshold": "5"},
                "extend": true
            }
        }))
        .unwrap();

        assert_eq!(change.short_sha(), "abc123de");
        assert_eq!(change.formtype(), "connectivity_watchdog");
        assert_eq!(change.target(), Some(Target::Tag("t1".to_string())));

        let content = change.content.unwrap();
        assert!(!content.is_reset());
        let example: Example = content.config_as().unwrap();
        assert_eq!(example.threshold, "5");
    }

    #[test]
    fn test_change_minimal() {
        let change: Change = serde_json::from_value(serde_json::json!({"sha": "ab"})).unwrap();
        assert_eq!(change.short_sha(), "ab");
        assert_eq!(change.formtype(), "unknown");
        assert!(change.target().is_none());
    }

    #[test]
    fn test_commit_request_shape() {
        assert_eq!(
            serde_json::to_value(CommitRequest::new("apply firewall")).unwrap(),
            serde_json::json!({"action": "commit", "message": "apply firewall"})
        );
    }

    #[test]
    fn test_commit_result_nothing_to_commit() {
        let result: CommitResult = serde_json::from_value(serde_json::json!({
            "result": "nothing to commit"
        }))
        .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.result.as_deref(), Some("nothing to commit"));
    }

    #[test]
    fn test_commit_result_with_changes() {
        let result: CommitResult = serde_json::from_value(serde_json::json!({
            "sha": "c0ffee",
            "changes": ["abc123", "def456"]
        }))
        .unwrap();
        assert!(!result.is_empty());
        assert_eq!(result.changes.len(), 2);
    }
}
