//! Role API operations

use log::info;

use crate::config::api;
use crate::error::Result;
use crate::qbee::QbeeClient;

use super::models::Role;

impl QbeeClient {
    pub async fn create_role(&self, role: &Role) -> Result<Role> {
        let path = format!("/{}", api::ROLE);
        let created: Role = self.post_json(&path, &role.definition()).await?;
        info!(
            "Created role '{}' ({})",
            created.name,
            created.id.as_deref().unwrap_or("no id")
        );
        Ok(created)
    }

    /// Get a role by ID; `None` if it does not exist
    pub async fn get_role(&self, id: &str) -> Result<Option<Role>> {
        let path = format!("/{}/{}", api::ROLE, urlencoding::encode(id));
        self.get_json_optional(&path).await
    }

    /// Replace a role definition
    pub async fn update_role(&self, id: &str, role: &Role) -> Result<Role> {
        let path = format!("/{}/{}", api::ROLE, urlencoding::encode(id));
        let updated: Role = self.put_json(&path, &role.definition()).await?;
        info!("Updated role '{}' ({})", updated.name, id);
        Ok(updated)
    }

    pub async fn delete_role(&self, id: &str) -> Result<()> {
        let path = format!("/{}/{}", api::ROLE, urlencoding::encode(id));
        self.delete_path(&path).await?;
        info!("Deleted role {}", id);
        Ok(())
    }
}
