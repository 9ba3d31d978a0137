//! Bootstrap key API operations

use log::{debug, info};

use crate::config::api;
use crate::error::{QbeeError, Result};
use crate::qbee::{ItemList, QbeeClient};

use super::models::{BootstrapKey, BootstrapKeyRequest};

impl QbeeClient {
    pub async fn list_bootstrap_keys(&self) -> Result<Vec<BootstrapKey>> {
        let path = format!("/{}", api::BOOTSTRAP_KEY);
        let list: ItemList<BootstrapKey> = self.get_json(&path).await?;
        debug!("Found {} bootstrap key(s)", list.items.len());
        Ok(list.items)
    }

    pub async fn create_bootstrap_key(&self, request: &BootstrapKeyRequest) -> Result<BootstrapKey> {
        if request.group_id.is_none() {
            return Err(QbeeError::Validation(
                "a bootstrap key needs a group".to_string(),
            ));
        }

        let path = format!("/{}", api::BOOTSTRAP_KEY);
        let key: BootstrapKey = self.post_json(&path, request).await?;
        info!("Created bootstrap key {}", key.id);
        Ok(key)
    }

    /// Get a bootstrap key; `None` if it does not exist
    pub async fn get_bootstrap_key(&self, id: &str) -> Result<Option<BootstrapKey>> {
        let path = format!("/{}/{}", api::BOOTSTRAP_KEY, urlencoding::encode(id));
        self.get_json_optional(&path).await
    }

    /// Change the group and/or auto-accept flag of a key
    pub async fn update_bootstrap_key(&self, id: &str, request: &BootstrapKeyRequest) -> Result<()> {
        if request.is_empty() {
            return Err(QbeeError::Validation(
                "nothing to update: give a group or an auto-accept value".to_string(),
            ));
        }

        let path = format!("/{}/{}", api::BOOTSTRAP_KEY, urlencoding::encode(id));
        self.send_json_no_content(reqwest::Method::PATCH, &path, request)
            .await?;
        info!("Updated bootstrap key {}", id);
        Ok(())
    }

    pub async fn delete_bootstrap_key(&self, id: &str) -> Result<()> {
        let path = format!("/{}/{}", api::BOOTSTRAP_KEY, urlencoding::encode(id));
        self.delete_path(&path).await?;
        info!("Deleted bootstrap key {}", id);
        Ok(())
    }
}
