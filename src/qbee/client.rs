//! qbee HTTP client for API interactions

use log::{debug, warn};
use reqwest::redirect::Policy;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::config::api;
use crate::error::{QbeeError, Result};
use crate::qbee::auth::TokenCache;
use crate::qbee::credentials::Credentials;

/// Error body returned by the API on failure
#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: String,
}

/// qbee API client
pub struct QbeeClient {
    client: Client,
    host: String,
    credentials: Credentials,
    tokens: Arc<TokenCache>,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl QbeeClient {
    /// Create a new client with its own token cache
    pub fn new(credentials: Credentials, host: String) -> Self {
        Self::with_token_cache(credentials, host, Arc::new(TokenCache::new()))
    }

    /// Create a client sharing an existing token cache
    pub fn with_token_cache(credentials: Credentials, host: String, tokens: Arc<TokenCache>) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .redirect(Policy::none())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            host,
            credentials,
            tokens,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(credentials: Credentials, tokens: Arc<TokenCache>, base_url: String) -> Self {
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            host: "mock.qbee.io".to_string(),
            credentials,
            tokens,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Token cache shared by this client
    pub fn tokens(&self) -> &Arc<TokenCache> {
        &self.tokens
    }

    /// Send a request with the bearer token attached
    ///
    /// `path` is relative to the API base (e.g. "/changelist"). Redirects
    /// are not followed: any status of 300 or above is turned into
    /// `QbeeError::Api`. A 401 evicts the
    /// cached token but the request is not retried.
    pub(crate) async fn send_authenticated<F>(
        &self,
        method: Method,
        path: &str,
        build: F,
    ) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let token = self.auth_token().await?;
        let url = format!("{}{}", self.base_url(), path);
        debug!("{} {}", method, url);

        let builder = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(token);
        let response = build(builder).send().await?;

        let status = response.status();
        if status.as_u16() >= 300 {
            if status == StatusCode::UNAUTHORIZED {
                warn!("{} {} was rejected as unauthorized", method, path);
                self.tokens.invalidate().await;
            }
            return Err(Self::api_error(&method, path, response).await);
        }

        Ok(response)
    }

    /// Convert a failed response into a structured error
    async fn api_error(method: &Method, path: &str, response: Response) -> QbeeError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Could not read error body of {} {}: {}", method, path, e);
                String::new()
            }
        };

        let (code, message) = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(parsed) => (parsed.error.code, parsed.error.message),
            Err(_) if body.trim().is_empty() => (
                None,
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            ),
            Err(_) => (None, body),
        };

        QbeeError::Api {
            method: method.to_string(),
            path: path.to_string(),
            status: status.as_u16(),
            code,
            message,
        }
    }

    /// Read a JSON response body into `T`
    async fn parse_json<T>(method: &Method, path: &str, response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            QbeeError::Json(format!(
                "Failed to parse response of {} {}: {}",
                method, path, e
            ))
        })
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send_authenticated(Method::GET, path, |b| b).await?;
        Self::parse_json(&Method::GET, path, response).await
    }

    /// GET a single resource, mapping 404 to `None`
    pub(crate) async fn get_json_optional<T>(&self, path: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.get_json(path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => {
                debug!("{} not found", path);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Send a JSON body and parse the JSON response
    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send_authenticated(method.clone(), path, |b| b.json(body))
            .await?;
        Self::parse_json(&method, path, response).await
    }

    /// Send a JSON body and ignore the response body
    pub(crate) async fn send_json_no_content<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send_authenticated(method, path, |b| b.json(body))
            .await?;
        Ok(())
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, path, body).await
    }

    pub(crate) async fn delete_path(&self, path: &str) -> Result<()> {
        self.send_authenticated(Method::DELETE, path, |b| b)
            .await?;
        Ok(())
    }

    /// DELETE with a JSON body (the file manager takes the path in the body)
    pub(crate) async fn delete_json<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send_json_no_content(Method::DELETE, path, body).await
    }

    /// Upload a multipart form, ignoring the response body
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<()> {
        self.send_authenticated(Method::POST, path, |b| b.multipart(form))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
impl QbeeClient {
    /// Test client with a pre-populated token (no login call)
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            Credentials::new("user@example.com", "secret"),
            Arc::new(TokenCache::with_token("test-token")),
            base_url.to_string(),
        )
    }

    /// Test client with an empty token cache
    pub fn test_client_with_login(base_url: &str) -> Self {
        Self::with_base_url(
            Credentials::new("user@example.com", "secret"),
            Arc::new(TokenCache::new()),
            base_url.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url() {
        let client = QbeeClient::new(
            Credentials::new("u", "p"),
            "www.app.qbee.io".to_string(),
        );
        assert_eq!(client.base_url(), "https://www.app.qbee.io/api/v2");
    }

    #[test]
    fn test_base_url_strips_leading_slash() {
        let client = QbeeClient::new(Credentials::new("u", "p"), "test.com".to_string());
        let url = client.base_url();
        assert!(!url.contains("//api"));
        assert!(url.starts_with("https://"));
    }

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/anything"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let value: serde_json::Value = client.get_json("/anything").await.unwrap();
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_structured_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/change"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"code": 1003, "message": "invalid formtype"}
            })))
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let err = client
            .post_json::<_, serde_json::Value>("/change", &serde_json::json!({}))
            .await
            .unwrap_err();

        match err {
            QbeeError::Api {
                method,
                path,
                status,
                code,
                message,
            } => {
                assert_eq!(method, "POST");
                assert_eq!(path, "/change");
                assert_eq!(status, 400);
                assert_eq!(code, Some(1003));
                assert_eq!(message, "invalid formtype");
            }
            other => panic!("Expected QbeeError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unstructured_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let err = client
            .get_json::<serde_json::Value>("/broken")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("upstream down"));
    }

    #[tokio::test]
    async fn test_redirect_status_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/moved"))
            .respond_with(ResponseTemplate::new(304))
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let err = client.delete_path("/moved").await.unwrap_err();
        assert_eq!(err.status(), Some(304));
    }

    #[tokio::test]
    async fn test_found_redirect_is_not_followed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/changelist"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("{}/elsewhere", mock_server.uri()).as_str()),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/elsewhere"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let err = client.list_uncommitted().await.unwrap_err();

        assert_eq!(err.status(), Some(302));
        assert!(err.to_string().contains("GET"));
        assert!(err.to_string().contains("/changelist"));
    }

    #[tokio::test]
    async fn test_redirected_commit_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/commit"))
            .respond_with(
                ResponseTemplate::new(307)
                    .insert_header("Location", format!("{}/commit-v2", mock_server.uri()).as_str()),
            )
            .mount(&mock_server)
            .await;

        Mock::given(path("/commit-v2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"sha": "c0ffee"})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let err = client.commit("msg").await.unwrap_err();
        assert_eq!(err.status(), Some(307));
    }

    #[tokio::test]
    async fn test_unauthorized_invalidates_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/changelist"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"code": 401, "message": "token expired"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let err = client.list_uncommitted().await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(client.tokens().cached().await.is_none());
    }

    #[tokio::test]
    async fn test_get_json_optional_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/role/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let value = client
            .get_json_optional::<serde_json::Value>("/role/missing")
            .await
            .unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/garbage"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = QbeeClient::test_client(&mock_server.uri());
        let err = client
            .get_json::<serde_json::Value>("/garbage")
            .await
            .unwrap_err();

        assert!(matches!(err, QbeeError::Json(_)));
        assert!(err.to_string().contains("GET /garbage"));
    }
}
