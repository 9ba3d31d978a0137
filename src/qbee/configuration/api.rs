//! Active configuration API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::qbee::{QbeeClient, Target};

use super::models::{ActiveConfiguration, ConfigurationResponse};

impl QbeeClient {
    /// Get the committed configuration of a tag or node
    pub async fn get_configuration(&self, target: &Target) -> Result<ActiveConfiguration> {
        let path = format!("/{}/{}", api::CONFIG, target.path_segment());
        let response: ConfigurationResponse = self.get_json(&path).await?;

        debug!(
            "Configuration for {}: {} bundle(s), commit {} (status {})",
            target,
            response.config.bundles.len(),
            response.config.commit_id.as_deref().unwrap_or("none"),
            response.status.as_deref().unwrap_or("unknown")
        );
        Ok(response.config)
    }
}
