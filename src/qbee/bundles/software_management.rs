//! Software management bundle

use serde::{Deserialize, Serialize};

use super::{Bundle, BundleKind, KeyValue};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SoftwareManagementBundle {
    #[serde(default)]
    pub items: Vec<SoftwarePackage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SoftwarePackage {
    /// Package name or path to a package file in the file manager
    pub package: String,
    /// Service restarted when the package or its config changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_condition: Option<String>,
    #[serde(default)]
    pub config_files: Vec<ConfigFile>,
    #[serde(default)]
    pub parameters: Vec<KeyValue>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub config_template: String,
    pub config_location: String,
}

impl Bundle for SoftwareManagementBundle {
    const KIND: BundleKind = BundleKind::SoftwareManagement;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_package() {
        let bundle: SoftwareManagementBundle = serde_json::from_value(serde_json::json!({
            "items": [{
                "package": "mosquitto",
                "service_name": "mosquitto",
                "config_files": [
                    {"config_template": "/mqtt/mosquitto.conf", "config_location": "/etc/mosquitto/mosquitto.conf"}
                ]
            }]
        }))
        .unwrap();

        let pkg = &bundle.items[0];
        assert_eq!(pkg.package, "mosquitto");
        assert_eq!(pkg.service_name.as_deref(), Some("mosquitto"));
        assert_eq!(pkg.config_files.len(), 1);
        assert!(pkg.parameters.is_empty());
    }
}
