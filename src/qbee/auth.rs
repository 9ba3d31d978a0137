//! Bearer token acquisition and caching

use log::{debug, info};
use serde::Deserialize;
use std::future::Future;
use tokio::sync::Mutex;

use crate::config::api;
use crate::error::{QbeeError, Result};
use crate::qbee::QbeeClient;

/// Lazily populated bearer token shared by every request of a client
///
/// The mutex is held while logging in, so concurrent first use results in a
/// single login call. Once set, the token is reused without re-validation
/// until it is explicitly invalidated.
#[derive(Debug, Default)]
pub struct TokenCache {
    token: Mutex<Option<String>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that already holds a token
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }

    /// Return the cached token or populate it with `login`
    pub async fn get_or_login<F, Fut>(&self, login: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let mut guard = self.token.lock().await;
        if let Some(ref token) = *guard {
            return Ok(token.clone());
        }

        let token = login().await?;
        *guard = Some(token.clone());
        Ok(token)
    }

    /// Currently cached token, if any
    pub async fn cached(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    /// Drop the cached token so the next request logs in again
    pub async fn invalidate(&self) {
        let mut guard = self.token.lock().await;
        if guard.take().is_some() {
            debug!("Cached auth token invalidated");
        }
    }
}

#[derive(Deserialize, Debug)]
struct LoginResponse {
    token: String,
}

impl QbeeClient {
    /// Return the bearer token, logging in on first use
    pub async fn auth_token(&self) -> Result<String> {
        self.tokens().get_or_login(|| self.login()).await
    }

    /// Exchange the configured credentials for a bearer token
    async fn login(&self) -> Result<String> {
        let url = format!("{}/{}", self.base_url(), api::LOGIN);
        debug!("Logging in as {} at {}", self.credentials().email, url);

        let response = self
            .http()
            .post(&url)
            .json(self.credentials())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if status != 200 {
            return Err(QbeeError::Auth(format!(
                "login returned status {}: {}",
                status, body
            )));
        }

        let login: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| QbeeError::Auth(format!("could not parse login response: {}", e)))?;

        if login.token.is_empty() {
            return Err(QbeeError::Auth("login returned an empty token".to_string()));
        }

        info!("Authenticated as {}", self.credentials().email);
        Ok(login.token)
    }
}
