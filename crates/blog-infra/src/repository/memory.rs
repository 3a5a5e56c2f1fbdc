//! In-memory post repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::Post;
use blog_core::error::{DomainError, DomainResult};
use blog_core::ports::PostRepository;

/// In-memory post store using a HashMap behind one async RwLock.
///
/// Reads take the shared lock, writes the exclusive one. The lock is held
/// only for the map access itself. Posts are cloned on every insert and every
/// read so no caller ever holds a reference into the map.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &Post) -> DomainResult<()> {
        let mut posts = self.posts.write().await;

        if posts.contains_key(&post.id) {
            return Err(DomainError::DuplicatePost);
        }
        posts.insert(post.id.clone(), post.clone());
        drop(posts);

        tracing::debug!(post_id = %post.id, "Post stored");
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<Post> {
        if id.is_empty() {
            return Err(DomainError::InvalidInput);
        }

        let posts = self.posts.read().await;
        posts.get(id).cloned().ok_or(DomainError::PostNotFound)
    }

    async fn update(&self, post: &Post) -> DomainResult<()> {
        if post.id.is_empty() {
            return Err(DomainError::InvalidInput);
        }

        let mut posts = self.posts.write().await;
        let stored = posts.get_mut(&post.id).ok_or(DomainError::PostNotFound)?;
        *stored = post.clone();
        drop(posts);

        tracing::debug!(post_id = %post.id, "Post replaced");
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        if id.is_empty() {
            return Err(DomainError::InvalidInput);
        }

        let mut posts = self.posts.write().await;
        if posts.remove(id).is_none() {
            return Err(DomainError::PostNotFound);
        }
        drop(posts);

        tracing::debug!(post_id = %id, "Post removed");
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }

    async fn count(&self) -> usize {
        self.posts.read().await.len()
    }
}
