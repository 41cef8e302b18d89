//! HTTP client for the todosync API.

pub mod health;
pub mod todos;

use crate::error::{ClientError, Result};

/// HTTP client for the todosync API.
///
/// Carries the bearer token and attaches it to every request.
#[derive(Debug, Clone)]
pub struct TodoSyncClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TodoSyncClient {
    /// Create a new client with the given base URL and bearer token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Create from environment (TODOSYNC_URL, TODOSYNC_TOKEN).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TODOSYNC_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let token = std::env::var("TODOSYNC_TOKEN").unwrap_or_default();
        Self::new(base_url, token)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build an authenticated request.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.url(path))
            .bearer_auth(&self.token)
    }

    /// Handle responses carrying a JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(self.error_for(status, response, resource).await)
        }
    }

    /// Handle responses with no body expected.
    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_for(status, response, resource).await)
        }
    }

    async fn error_for(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
        resource: &str,
    ) -> ClientError {
        match status.as_u16() {
            401 => ClientError::Unauthorized,
            404 => ClientError::NotFound {
                resource: resource.to_string(),
            },
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                ClientError::ServerError {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}
