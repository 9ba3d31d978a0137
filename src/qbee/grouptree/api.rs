//! Group tree API operations

use log::{debug, info};

use crate::config::api;
use crate::error::{QbeeError, Result};
use crate::qbee::QbeeClient;

use super::models::{GroupTreeChange, GroupTreeNode, GroupTreeRequest, NodeType};

impl QbeeClient {
    /// Apply a batch of group tree changes
    ///
    /// Group tree edits take effect immediately; they are not staged.
    pub async fn update_grouptree(&self, changes: &[GroupTreeChange]) -> Result<()> {
        if changes.is_empty() {
            return Err(QbeeError::Validation(
                "no group tree changes to apply".to_string(),
            ));
        }

        let path = format!("/{}", api::GROUPTREE);
        for change in changes {
            debug!("Group tree {} of '{}'", change.action(), change.node_id());
        }

        self.send_json_no_content(reqwest::Method::PUT, &path, &GroupTreeRequest { changes })
            .await?;

        info!("Applied {} group tree change(s)", changes.len());
        Ok(())
    }

    /// Get a group tree node; `None` if it does not exist
    pub async fn get_grouptree_node(&self, node_id: &str) -> Result<Option<GroupTreeNode>> {
        let path = format!("/{}/{}", api::GROUPTREE, urlencoding::encode(node_id));
        self.get_json_optional(&path).await
    }

    pub async fn create_group(&self, node_id: &str, parent_id: &str, title: &str) -> Result<()> {
        self.update_grouptree(&[GroupTreeChange::Create {
            node_id: node_id.to_string(),
            parent_id: parent_id.to_string(),
            title: title.to_string(),
            node_type: NodeType::Group,
        }])
        .await
    }

    pub async fn rename_node(&self, node_id: &str, title: &str) -> Result<()> {
        self.update_grouptree(&[GroupTreeChange::Rename {
            node_id: node_id.to_string(),
            title: title.to_string(),
        }])
        .await
    }

    pub async fn delete_node(&self, node_id: &str) -> Result<()> {
        self.update_grouptree(&[GroupTreeChange::Delete {
            node_id: node_id.to_string(),
        }])
        .await
    }

    /// Move a node under a new parent
    ///
    /// The API wants the current parent too, so the node is read first.
    pub async fn move_node(&self, node_id: &str, parent_id: &str) -> Result<()> {
        let node = self.get_grouptree_node(node_id).await?.ok_or_else(|| {
            QbeeError::Validation(format!("group tree node '{}' not found", node_id))
        })?;
        let old_parent_id = node.parent().ok_or_else(|| {
            QbeeError::Validation(format!("group tree node '{}' has no parent", node_id))
        })?;

        self.update_grouptree(&[GroupTreeChange::Move {
            node_id: node_id.to_string(),
            old_parent_id: old_parent_id.to_string(),
            parent_id: parent_id.to_string(),
        }])
        .await
    }

    /// Replace the tags of a node
    pub async fn set_node_tags(&self, node_id: &str, tags: &[String]) -> Result<()> {
        self.update_grouptree(&[GroupTreeChange::UpdateTags {
            node_id: node_id.to_string(),
            tags: tags.to_vec(),
        }])
        .await
    }
}
