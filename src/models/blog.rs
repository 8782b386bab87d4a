// src/models/blog.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{User, UserSummary};

/// A blog post. `user_id` references the owning user, set at creation and
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,

    /// Author display string; independent of the owner identity.
    pub author: String,
    pub url: String,
    pub likes: i64,

    /// Owner reference, inverse of `User::blogs`.
    pub user_id: Uuid,

    /// Append-only comment list.
    pub comments: Vec<String>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields the store needs to mint a new blog; the id and timestamp are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user_id: Uuid,
}

/// DTO for creating or updating a blog. All fields optional at the serde
/// level so missing ones surface as 400s with per-field messages instead
/// of a generic deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct BlogPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// DTO for appending a comment to a blog.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub comment: Option<String>,
}

/// Blog view returned by the API, with the owner summary populated.
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub comments: Vec<String>,
    pub user: Option<UserSummary>,
}

impl BlogResponse {
    pub fn from_blog(blog: &Blog, owner: Option<&User>) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
            comments: blog.comments.clone(),
            user: owner.map(UserSummary::from),
        }
    }
}

/// Blog summary embedded in user views.
#[derive(Debug, Serialize)]
pub struct BlogSummary {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
}

impl From<&Blog> for BlogSummary {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
        }
    }
}
