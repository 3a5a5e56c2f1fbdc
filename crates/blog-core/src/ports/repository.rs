use async_trait::async_trait;

use crate::domain::Post;
use crate::error::DomainResult;

/// Post repository - the keyed store that owns canonical post state.
///
/// Implementations must copy on the way in and on the way out: a value passed
/// to `create`/`update` or returned from `get_by_id`/`list` never aliases the
/// stored record.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post. Fails with `DuplicatePost` when the id is taken.
    async fn create(&self, post: &Post) -> DomainResult<()>;

    /// Fetch a post by id. Fails with `InvalidInput` on an empty id and
    /// `PostNotFound` when absent.
    async fn get_by_id(&self, id: &str) -> DomainResult<Post>;

    /// Replace an existing post wholesale.
    async fn update(&self, post: &Post) -> DomainResult<()>;

    /// Remove a post by id.
    async fn delete(&self, id: &str) -> DomainResult<()>;

    /// Every stored post, in no particular order.
    async fn list(&self) -> DomainResult<Vec<Post>>;

    /// Number of stored posts.
    async fn count(&self) -> usize;
}
