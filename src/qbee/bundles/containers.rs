//! Container bundles for Docker and Podman

use serde::{Deserialize, Serialize};

use super::{Bundle, BundleKind};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DockerContainersBundle {
    #[serde(default)]
    pub items: Vec<DockerContainer>,
    #[serde(default)]
    pub registry_auths: Vec<RegistryAuth>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DockerContainer {
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_args: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_condition: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PodmanContainersBundle {
    #[serde(default)]
    pub items: Vec<PodmanContainer>,
    #[serde(default)]
    pub registry_auths: Vec<RegistryAuth>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PodmanContainer {
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub podman_args: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_condition: Option<String>,
}

/// Credentials for a private registry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegistryAuth {
    pub server: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Bundle for DockerContainersBundle {
    const KIND: BundleKind = BundleKind::DockerContainers;
}

impl Bundle for PodmanContainersBundle {
    const KIND: BundleKind = BundleKind::PodmanContainers;
}
