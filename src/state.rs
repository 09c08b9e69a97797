//! Application State
//!
//! Everything the root controller owns. Mutated only through
//! [`crate::controller::BlogApp`].

use crate::models::{Blog, Credentials, User};
use crate::notification::Notifier;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Blogs in service order (display order is computed on render)
    pub blogs: Vec<Blog>,
    /// Login form username input
    pub username: String,
    /// Login form password input
    pub password: String,
    /// Logged-in user; `None` means logged out
    pub user: Option<User>,
    /// Transient toast message
    pub notifier: Notifier,
    /// Whether the blog creation panel is open
    pub blog_form_open: bool,
}

impl AppState {
    pub fn message(&self) -> Option<&str> {
        self.notifier.text()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    pub fn find_blog(&self, id: &str) -> Option<&Blog> {
        self.blogs.iter().find(|b| b.id == id)
    }

    /// Add one like to the entry with `id` and return the updated record
    pub fn like_blog(&mut self, id: &str) -> Option<Blog> {
        let blog = self.blogs.iter_mut().find(|b| b.id == id)?;
        blog.likes += 1;
        Some(blog.clone())
    }

    /// Take back one like from the entry with `id`, if it is still listed
    pub fn unlike_blog(&mut self, id: &str) {
        if let Some(blog) = self.blogs.iter_mut().find(|b| b.id == id) {
            blog.likes = blog.likes.saturating_sub(1);
        }
    }

    pub fn remove_blog(&mut self, id: &str) {
        self.blogs.retain(|b| b.id != id);
    }
}
