use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post store - persistence of post records with no business logic.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All stored posts. The order is stable within one call.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Store a draft under a freshly assigned id.
    async fn insert(&self, draft: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Overwrite every field of the post stored under `id`.
    /// Fails with `RepoError::NotFound` if nothing is stored there.
    async fn replace_by_id(&self, id: PostId, post: Post) -> Result<Post, RepoError>;

    /// Remove the post stored under `id`.
    /// Fails with `RepoError::NotFound` if nothing is stored there.
    async fn delete_by_id(&self, id: PostId) -> Result<(), RepoError>;
}
