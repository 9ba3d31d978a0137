//! Inventory API operations

use crate::config::api;
use crate::error::Result;
use crate::qbee::QbeeClient;

use super::models::NodeInventory;

impl QbeeClient {
    /// Get the inventory of a node
    pub async fn get_inventory(&self, node_id: &str) -> Result<NodeInventory> {
        let path = format!("/{}/{}", api::INVENTORY, urlencoding::encode(node_id));
        self.get_json(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_inventory() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/inventory/n1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "node_id": "n1",
                "pub_ip": "198.51.100.7",
                "system": {"hostname": "edge-1", "os_type": "linux"}
            })))
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let inventory = client.get_inventory("n1").await.unwrap();
        assert_eq!(inventory.pub_ip.as_deref(), Some("198.51.100.7"));
    }

    #[tokio::test]
    async fn test_get_inventory_unknown_node() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/inventory/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"code": 404, "message": "no inventory for node"}
            })))
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let err = client.get_inventory("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
