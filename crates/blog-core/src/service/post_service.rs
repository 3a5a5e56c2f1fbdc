//! Post use-case service.
//!
//! Generates identities, validates candidates and sequences repository calls.
//! Errors from the repository are returned unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::{DomainError, DomainResult};
use crate::ports::PostRepository;

/// Source of fresh post identities.
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Default identity scheme: a random 128-bit UUID.
pub fn generate_post_id() -> String {
    Uuid::new_v4().to_string()
}

/// Post use-cases exposed to the call handler.
#[async_trait]
pub trait PostService: Send + Sync {
    async fn create_post(
        &self,
        title: String,
        content: String,
        author: String,
        publication_date: String,
        tags: Vec<String>,
    ) -> DomainResult<Post>;

    async fn get_post(&self, id: &str) -> DomainResult<Post>;

    /// Replaces title, content, author and tags. The id and publication date
    /// of the stored post are kept.
    async fn update_post(
        &self,
        id: &str,
        title: String,
        content: String,
        author: String,
        tags: Vec<String>,
    ) -> DomainResult<Post>;

    async fn delete_post(&self, id: &str) -> DomainResult<()>;
}

/// Service backed by any [`PostRepository`].
pub struct BlogPostService {
    repo: Arc<dyn PostRepository>,
    next_id: IdGenerator,
}

impl BlogPostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self::with_id_generator(repo, Arc::new(generate_post_id))
    }

    pub fn with_id_generator(repo: Arc<dyn PostRepository>, next_id: IdGenerator) -> Self {
        Self { repo, next_id }
    }
}

#[async_trait]
impl PostService for BlogPostService {
    async fn create_post(
        &self,
        title: String,
        content: String,
        author: String,
        publication_date: String,
        tags: Vec<String>,
    ) -> DomainResult<Post> {
        let post = Post::new(
            (self.next_id)(),
            title,
            content,
            author,
            publication_date,
            tags,
        );
        post.validate()?;

        self.repo.create(&post).await?;
        tracing::debug!(post_id = %post.id, "Post created");

        Ok(post)
    }

    async fn get_post(&self, id: &str) -> DomainResult<Post> {
        if id.is_empty() {
            return Err(DomainError::InvalidInput);
        }
        self.repo.get_by_id(id).await
    }

    async fn update_post(
        &self,
        id: &str,
        title: String,
        content: String,
        author: String,
        tags: Vec<String>,
    ) -> DomainResult<Post> {
        if id.is_empty() {
            return Err(DomainError::InvalidInput);
        }

        let mut post = self.repo.get_by_id(id).await?;
        post.title = title;
        post.content = content;
        post.author = author;
        post.tags = tags;
        post.validate()?;

        self.repo.update(&post).await?;
        tracing::debug!(post_id = %post.id, "Post updated");

        Ok(post)
    }

    async fn delete_post(&self, id: &str) -> DomainResult<()> {
        if id.is_empty() {
            return Err(DomainError::InvalidInput);
        }
        self.repo.delete(id).await
    }
}
