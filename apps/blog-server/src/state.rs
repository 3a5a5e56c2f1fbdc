//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::{BlogPostService, PostRepository, PostService};
use blog_infra::InMemoryPostRepository;

use crate::observability::CallLogger;

/// Shared application state.
///
/// Built once at startup; every worker gets a clone of the same `Arc`s, so
/// all calls hit the one store.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostService>,
    pub repo: Arc<dyn PostRepository>,
    pub call_logger: CallLogger,
}

impl AppState {
    /// Build the state around a fresh in-memory store.
    pub fn new(call_logger: CallLogger) -> Self {
        let repo: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        tracing::info!("Using in-memory post repository");

        Self::with_repository(repo, call_logger)
    }

    pub fn with_repository(repo: Arc<dyn PostRepository>, call_logger: CallLogger) -> Self {
        let posts: Arc<dyn PostService> = Arc::new(BlogPostService::new(repo.clone()));

        Self {
            posts,
            repo,
            call_logger,
        }
    }
}
