//! # Blog List
//!
//! View, create, like and delete blog entries against a remote REST service.
//!
//! ## Modules
//!
//! - [`controller`]: Root controller owning all application state
//! - [`view`]: Display composition, a pure function of the state
//! - [`services`]: Blog and login service client traits (and the `reqwest` client)
//! - [`session`]: Session persistence under a single key
//! - [`notification`]: Auto-expiring toast messages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bloglist::{ApiClient, ApiConfig, BlogApp, FileSessionStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::default())?;
//!     let sessions = FileSessionStore::new(FileSessionStore::default_path());
//!     let app = BlogApp::new(client.clone(), client, sessions);
//!
//!     app.bootstrap().await?;
//!     app.set_username("root");
//!     app.set_password("sekret");
//!     app.login().await?;
//!
//!     for blog in bloglist::view::sort_by_likes(&app.state().blogs) {
//!         println!("{} {} ({} likes)", blog.title, blog.author, blog.likes);
//!     }
//!     Ok(())
//! }
//! ```

#[cfg(feature = "native")]
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod notification;
pub mod services;
pub mod session;
pub mod state;
pub mod view;

// Re-export top-level types for convenience
pub use controller::{BlogApp, CREATE_FAILED, WRONG_CREDENTIALS};
pub use error::{AppError, AppResult, ServiceError, SessionError};
pub use models::{AuthToken, Blog, BlogDraft, BlogOwner, Credentials, Owner, User};
pub use notification::{Message, MessageTicket, Notifier, MESSAGE_TTL};
pub use services::{BlogService, LoginService};
pub use session::{MemorySessionStore, SessionStore, SESSION_KEY};
pub use state::AppState;
pub use view::{BlogItem, BlogsView, LoginView, View};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "native")]
pub use services::{ApiClient, ApiConfig};

#[cfg(feature = "native")]
pub use session::FileSessionStore;
