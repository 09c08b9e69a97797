//! UI Components
//!
//! Presentational Leptos components, driven entirely by props and callbacks.

pub mod blog;
pub mod blog_form;
pub mod login_form;
pub mod notification;
pub mod togglable;

pub use blog::Blog;
pub use blog_form::BlogForm;
pub use login_form::LoginForm;
pub use notification::Notification;
pub use togglable::Togglable;
