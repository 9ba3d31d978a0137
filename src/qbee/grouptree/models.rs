//! Group tree data models

use serde::{Deserialize, Serialize};

/// Kind of a group tree node
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Group,
    Device,
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeType::Group => write!(f, "group"),
            NodeType::Device => write!(f, "device"),
        }
    }
}

/// One operation of a `PUT /grouptree` request
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", content = "data", rename_all = "snake_case")]
pub enum GroupTreeChange {
    Create {
        node_id: String,
        parent_id: String,
        title: String,
        #[serde(rename = "type")]
        node_type: NodeType,
    },
    Rename {
        node_id: String,
        title: String,
    },
    Delete {
        node_id: String,
    },
    Move {
        node_id: String,
        old_parent_id: String,
        parent_id: String,
    },
    UpdateTags {
        node_id: String,
        tags: Vec<String>,
    },
}

impl GroupTreeChange {
    pub fn node_id(&self) -> &str {
        match self {
            GroupTreeChange::Create { node_id, .. }
            | GroupTreeChange::Rename { node_id, .. }
            | GroupTreeChange::Delete { node_id }
            | GroupTreeChange::Move { node_id, .. }
            | GroupTreeChange::UpdateTags { node_id, .. } => node_id,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            GroupTreeChange::Create { .. } => "create",
            GroupTreeChange::Rename { .. } => "rename",
            GroupTreeChange::Delete { .. } => "delete",
            GroupTreeChange::Move { .. } => "move",
            GroupTreeChange::UpdateTags { .. } => "update_tags",
        }
    }
}

/// Body of `PUT /grouptree`
#[derive(Serialize, Debug)]
pub(crate) struct GroupTreeRequest<'a> {
    pub changes: &'a [GroupTreeChange],
}

/// A node of the group tree as returned by `GET /grouptree/{node_id}`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GroupTreeNode {
    pub node_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Node ids from the root down to the parent
    #[serde(default)]
    pub ancestors: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<GroupTreeNode>,
}

impl GroupTreeNode {
    pub fn is_group(&self) -> bool {
        self.node_type == Some(NodeType::Group)
    }

    /// Parent id, falling back to the last ancestor
    pub fn parent(&self) -> Option<&str> {
        self.parent_id
            .as_deref()
            .or_else(|| self.ancestors.last().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_change_shape() {
        let change = GroupTreeChange::Create {
            node_id: "site-a".to_string(),
            parent_id: "root".to_string(),
            title: "Site A".to_string(),
            node_type: NodeType::Group,
        };

        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            serde_json::json!({
                "action": "create",
                "data": {"node_id": "site-a", "parent_id": "root", "title": "Site A", "type": "group"}
            })
        );
    }

    #[test]
    fn test_update_tags_action_name() {
        let change = GroupTreeChange::UpdateTags {
            node_id: "node-1".to_string(),
            tags: vec!["edge".to_string()],
        };
        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(value["action"], "update_tags");
        assert_eq!(value["data"]["tags"][0], "edge");
        assert_eq!(change.action(), "update_tags");
        assert_eq!(change.node_id(), "node-1");
    }

    #[test]
    fn test_node_parent_fallback() {
        let node: GroupTreeNode = serde_json::from_value(serde_json::json!({
            "node_id": "site-a",
            "title": "Site A",
            "type": "group",
            "ancestors": ["root", "eu"]
        }))
        .unwrap();

        assert!(node.is_group());
        assert_eq!(node.parent(), Some("eu"));
        assert!(node.nodes.is_empty());
    }
}
