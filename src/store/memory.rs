// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BlogStore, StoreError, UserStore};
use crate::models::{
    blog::{Blog, NewBlog},
    user::{NewUser, User},
};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    blogs: HashMap<Uuid, Blog>,
}

/// In-memory backend implementing both store traits behind one lock.
///
/// Holding the write lock across the uniqueness check and the insert is
/// what gives `UserStore::create` its atomicity.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.username == new.username) {
            return Err(StoreError::DuplicateUsername(new.username));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: new.username,
            name: new.name,
            password_hash: new.password_hash,
            blogs: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.users.insert(user.id, user);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn create(&self, new: NewBlog) -> Result<Blog, StoreError> {
        let mut inner = self.inner.write().await;

        let blog = Blog {
            id: Uuid::new_v4(),
            title: new.title,
            author: new.author,
            url: new.url,
            likes: new.likes,
            user_id: new.user_id,
            comments: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        inner.blogs.insert(blog.id, blog.clone());

        Ok(blog)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.blogs.get(&id).cloned())
    }

    async fn save(&self, blog: Blog) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.blogs.insert(blog.id, blog);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.blogs.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Blog>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.blogs.values().cloned().collect())
    }
}
