//! Blog List REST API Client
//!
//! `reqwest` implementation of the blog and login services.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{error_message, BlogService, LoginService};
use crate::error::ServiceError;
use crate::models::{AuthToken, Blog, BlogDraft, Credentials, User};

/// REST API client for the blog and login services
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "http://localhost:3003/api")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3003/api".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl ApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: ApiConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Fail on a non-success status, keeping the service's error text
    async fn check(response: Response) -> Result<Response, ServiceError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(ServiceError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            })
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl BlogService for ApiClient {
    async fn get_all(&self) -> Result<Vec<Blog>, ServiceError> {
        tracing::debug!("GET blogs");
        let response = self.client.get(self.url("blogs")).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, token: &AuthToken, draft: &BlogDraft) -> Result<Blog, ServiceError> {
        tracing::debug!(title = %draft.title, "POST blog");
        let response = self
            .client
            .post(self.url("blogs"))
            .header(reqwest::header::AUTHORIZATION, token.header_value())
            .json(draft)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update(
        &self,
        token: &AuthToken,
        id: &str,
        blog: &Blog,
    ) -> Result<Blog, ServiceError> {
        tracing::debug!(id, "PUT blog");
        let response = self
            .client
            .put(self.url(&format!("blogs/{}", id)))
            .header(reqwest::header::AUTHORIZATION, token.header_value())
            .json(blog)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn remove(&self, token: &AuthToken, id: &str) -> Result<(), ServiceError> {
        tracing::debug!(id, "DELETE blog");
        let response = self
            .client
            .delete(self.url(&format!("blogs/{}", id)))
            .header(reqwest::header::AUTHORIZATION, token.header_value())
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl LoginService for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<User, ServiceError> {
        tracing::debug!(username = %credentials.username, "POST login");
        let response = self
            .client
            .post(self.url("login"))
            .json(credentials)
            .send()
            .await?;
        Self::decode(response).await
    }
}
