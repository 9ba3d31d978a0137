//! File distribution bundle

use serde::{Deserialize, Serialize};

use super::{Bundle, BundleKind, KeyValue};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FileDistributionBundle {
    #[serde(default)]
    pub files: Vec<FileSet>,
}

/// A group of files deployed together, optionally followed by a command
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FileSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Shell command run after the files changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_condition: Option<String>,
    #[serde(default)]
    pub templates: Vec<FileTemplate>,
    #[serde(default)]
    pub parameters: Vec<KeyValue>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileTemplate {
    /// Path in the file manager
    pub source: String,
    /// Path on the device
    pub destination: String,
    #[serde(default)]
    pub is_template: bool,
}

impl Bundle for FileDistributionBundle {
    const KIND: BundleKind = BundleKind::FileDistribution;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_file_set() {
        let bundle: FileDistributionBundle = serde_json::from_value(serde_json::json!({
            "files": [{
                "label": "nginx",
                "command": "systemctl reload nginx",
                "templates": [
                    {"source": "/nginx/site.conf", "destination": "/etc/nginx/conf.d/site.conf", "is_template": true}
                ],
                "parameters": [{"key": "port", "value": "8080"}]
            }]
        }))
        .unwrap();

        let set = &bundle.files[0];
        assert_eq!(set.label.as_deref(), Some("nginx"));
        assert!(set.pre_condition.is_none());
        assert!(set.templates[0].is_template);
        assert_eq!(set.parameters[0].value, "8080");
    }

    #[test]
    fn test_optional_fields_omitted() {
        let bundle = FileDistributionBundle {
            files: vec![FileSet {
                templates: vec![FileTemplate {
                    source: "/a".to_string(),
                    destination: "/b".to_string(),
                    is_template: false,
                }],
                ..Default::default()
            }],
        };
        let value = serde_json::to_value(&bundle).unwrap();
        assert!(value["files"][0].get("label").is_none());
        assert!(value["files"][0].get("command").is_none());
    }
}
