// src/models/user.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::blog::{Blog, BlogSummary};

/// A registered user. Identifiers are store-assigned and immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,

    /// Unique username, case-sensitive.
    pub username: String,

    /// Display name, free text.
    pub name: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password_hash: String,

    /// Ids of blogs owned by this user, the inverse of `Blog::user_id`.
    pub blogs: Vec<Uuid>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields the store needs to mint a new user; id and timestamps are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password_hash: String,
}

/// DTO for creating a new user (Registration).
/// The password is checked by hand in the handler (cheap length check
/// before any hashing) so it stays out of the derive.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 3,
        message = "Path `username` is shorter than the minimum allowed length (3)"
    ))]
    pub username: String,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// DTO for user login.
///
/// Deliberately unvalidated: any credential pair reaches the credential
/// check, and whatever does not match fails the one undifferentiated way.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// User view returned by the API, with owned blogs populated.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogSummary>,
}

impl UserResponse {
    /// Builds the view, resolving the user's owned-blog ids against the
    /// given blogs. Ids with no matching blog are skipped.
    pub fn from_user(user: &User, blogs: &[Blog]) -> Self {
        let summaries = user
            .blogs
            .iter()
            .filter_map(|id| blogs.iter().find(|b| b.id == *id))
            .map(BlogSummary::from)
            .collect();

        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            blogs: summaries,
        }
    }
}

/// Owner summary embedded in blog views.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}
