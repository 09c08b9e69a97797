//! Data Model
//!
//! Records exchanged with the blog and login services and persisted in the
//! session store.

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the login service.
///
/// Persisted verbatim in the session store; the token authorizes every
/// write call to the blog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub id: String,
    pub token: String,
}

impl User {
    /// Public identity fields, as embedded in blogs this user owns
    pub fn owner(&self) -> BlogOwner {
        BlogOwner {
            username: self.username.clone(),
            name: self.name.clone(),
            id: self.id.clone(),
        }
    }

    /// Token to attach to authenticated service calls
    pub fn auth_token(&self) -> AuthToken {
        AuthToken(self.token.clone())
    }
}

/// Bearer token carried explicitly into each authenticated call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(pub String);

impl AuthToken {
    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

/// The owning user embedded in a blog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogOwner {
    pub username: String,
    pub name: String,
    pub id: String,
}

/// Who owns a blog, as the service reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Owner {
    /// Populated owner object
    Embedded(BlogOwner),
    /// Bare owner id, as create and update responses commonly return it
    Reference(String),
}

impl Owner {
    /// Display name, known only for an embedded owner
    pub fn name(&self) -> Option<&str> {
        match self {
            Owner::Embedded(owner) => Some(&owner.name),
            Owner::Reference(_) => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Owner::Embedded(owner) => Some(&owner.username),
            Owner::Reference(_) => None,
        }
    }
}

impl From<BlogOwner> for Owner {
    fn from(owner: BlogOwner) -> Self {
        Owner::Embedded(owner)
    }
}

/// A blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
    /// Kept as received so an update sends the owner back unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Owner>,
}

impl Blog {
    /// Whether `user` owns this blog. A bare id reference never matches.
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user
            .as_ref()
            .and_then(Owner::username)
            .map(|username| username == user.username)
            .unwrap_or(false)
    }
}

/// A blog as submitted from the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub author: String,
    pub url: String,
}

/// Login request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
