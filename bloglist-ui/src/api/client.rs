//! HTTP API Client
//!
//! `gloo-net` implementation of the blog and login services.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use bloglist::services::error_message;
use bloglist::{
    AuthToken, Blog, BlogDraft, BlogService, Credentials, LoginService, ServiceError, User,
};

/// Default API base URL (same origin, proxied to the blog service)
pub const DEFAULT_API_BASE: &str = "/api";

/// Local storage key overriding the API base URL
const API_URL_KEY: &str = "bloglist_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Browser client for the blog and login services
#[derive(Clone)]
pub struct BrowserApi {
    base: String,
}

impl BrowserApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), path)
    }
}

fn network(e: gloo_net::Error) -> ServiceError {
    ServiceError::Network(e.to_string())
}

fn authorized(builder: RequestBuilder, token: &AuthToken) -> RequestBuilder {
    builder.header("Authorization", &token.header_value())
}

async fn check(response: Response) -> Result<Response, ServiceError> {
    if response.ok() {
        Ok(response)
    } else {
        let text = response.text().await.unwrap_or_default();
        Err(ServiceError::Status {
            status: response.status(),
            message: error_message(&text),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    check(response)
        .await?
        .json()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl BlogService for BrowserApi {
    async fn get_all(&self) -> Result<Vec<Blog>, ServiceError> {
        let response = Request::get(&self.url("blogs"))
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn create(&self, token: &AuthToken, draft: &BlogDraft) -> Result<Blog, ServiceError> {
        let response = authorized(Request::post(&self.url("blogs")), token)
            .json(draft)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn update(
        &self,
        token: &AuthToken,
        id: &str,
        blog: &Blog,
    ) -> Result<Blog, ServiceError> {
        let response = authorized(Request::put(&self.url(&format!("blogs/{}", id))), token)
            .json(blog)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn remove(&self, token: &AuthToken, id: &str) -> Result<(), ServiceError> {
        let response = authorized(Request::delete(&self.url(&format!("blogs/{}", id))), token)
            .send()
            .await
            .map_err(network)?;
        check(response).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl LoginService for BrowserApi {
    async fn login(&self, credentials: &Credentials) -> Result<User, ServiceError> {
        let response = Request::post(&self.url("login"))
            .json(credentials)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }
}
