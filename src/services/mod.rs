//! Service Clients
//!
//! Traits over the remote blog and login services. The controller is generic
//! over these so the browser (`gloo-net`), native (`reqwest`) and test clients
//! plug in the same way.
//!
//! Futures are `?Send`: everything runs on one thread, and browser fetch
//! futures cannot cross threads.

#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::{ApiClient, ApiConfig};

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::models::{AuthToken, Blog, BlogDraft, Credentials, User};

/// The remote blog collection
#[async_trait(?Send)]
pub trait BlogService {
    /// Fetch every blog, in service order
    async fn get_all(&self) -> Result<Vec<Blog>, ServiceError>;

    /// Create a blog; the service assigns the id and defaults the likes
    async fn create(&self, token: &AuthToken, draft: &BlogDraft) -> Result<Blog, ServiceError>;

    /// Replace the blog stored under `id`
    async fn update(&self, token: &AuthToken, id: &str, blog: &Blog)
        -> Result<Blog, ServiceError>;

    /// Delete the blog stored under `id`
    async fn remove(&self, token: &AuthToken, id: &str) -> Result<(), ServiceError>;
}

/// The remote login endpoint
#[async_trait(?Send)]
pub trait LoginService {
    /// Exchange credentials for an authenticated user
    async fn login(&self, credentials: &Credentials) -> Result<User, ServiceError>;
}

/// Error body returned by the services on failure
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Best message to surface from a failed response body
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}
