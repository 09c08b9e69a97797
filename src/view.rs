//! Display Composition
//!
//! What to show is a pure function of [`AppState`]. Logged out, only the
//! login form. Logged in, the blog list sorted by likes, the creation panel
//! and the logout affordance.

use crate::models::Blog;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Login(LoginView),
    Blogs(BlogsView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginView {
    pub message: Option<String>,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogsView {
    pub message: Option<String>,
    /// Display name of the logged-in user
    pub user_name: String,
    pub blog_form_open: bool,
    /// Sorted by likes, most liked first
    pub blogs: Vec<BlogItem>,
}

impl BlogsView {
    /// "{name} Logged In"
    pub fn logged_in_label(&self) -> String {
        format!("{} Logged In", self.user_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogItem {
    pub blog: Blog,
    /// The logged-in user owns this blog and may delete it
    pub removable: bool,
}

/// Stable sort by likes, descending; ties keep their input order
pub fn sort_by_likes(blogs: &[Blog]) -> Vec<Blog> {
    let mut sorted = blogs.to_vec();
    sorted.sort_by(|a, b| b.likes.cmp(&a.likes));
    sorted
}

pub fn render(state: &AppState) -> View {
    let message = state.message().map(str::to_string);

    match &state.user {
        None => View::Login(LoginView {
            message,
            username: state.username.clone(),
            password: state.password.clone(),
        }),
        Some(user) => View::Blogs(BlogsView {
            message,
            user_name: user.name.clone(),
            blog_form_open: state.blog_form_open,
            blogs: sort_by_likes(&state.blogs)
                .into_iter()
                .map(|blog| BlogItem {
                    removable: blog.is_owned_by(user),
                    blog,
                })
                .collect(),
        }),
    }
}
