// src/store/mod.rs

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    blog::{Blog, NewBlog},
    user::{NewUser, User},
};

pub mod memory;

pub use memory::MemoryStore;

/// Failures surfaced by a store backend.
///
/// Username uniqueness is a store-level constraint: `UserStore::create` is
/// the single place it is enforced, so concurrent registrations with the
/// same username yield exactly one success and one `DuplicateUsername`.
#[derive(Debug)]
pub enum StoreError {
    DuplicateUsername(String),
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateUsername(username) => {
                write!(f, "username `{}` already exists", username)
            }
            StoreError::Backend(msg) => write!(f, "store backend error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence contract for user records. Ids are store-assigned.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates a user, enforcing username uniqueness atomically.
    async fn create(&self, new: NewUser) -> Result<User, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Persists mutations to an existing user, notably the owned-blog set.
    async fn save(&self, user: User) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<User>, StoreError>;
}

/// Persistence contract for blog records. Ids are store-assigned.
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn create(&self, new: NewBlog) -> Result<Blog, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, StoreError>;

    /// Persists mutations to an existing blog (field updates, appended
    /// comments).
    async fn save(&self, blog: Blog) -> Result<(), StoreError>;

    /// Removes a blog. Returns false when no blog had the given id.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn list(&self) -> Result<Vec<Blog>, StoreError>;
}

/// Collection of store handles injected into the application state.
#[derive(Clone)]
pub struct Store {
    pub users: Arc<dyn UserStore>,
    pub blogs: Arc<dyn BlogStore>,
}

impl Store {
    /// Builds a store backed by a single in-memory backend.
    pub fn in_memory() -> Self {
        let backend = Arc::new(MemoryStore::new());
        Self {
            users: backend.clone(),
            blogs: backend,
        }
    }
}
