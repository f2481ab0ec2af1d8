//! Post service - the four request operations, independent of HTTP.
//!
//! Each operation makes one or two sequential store calls with no
//! transaction around them. A concurrent update and delete of the same id
//! may interleave; an update that loses that race reports `NotFound`, and
//! two concurrent updates can overwrite each other.

use std::sync::Arc;

use crate::domain::{Post, PostId, PostPatch};
use crate::error::DomainError;
use crate::ports::PostRepository;

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list().await?)
    }

    pub async fn create(&self, payload: PostPatch) -> Result<Post, DomainError> {
        let draft = payload.into_new_post()?;
        let post = self.repo.insert(draft).await?;
        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), DomainError> {
        let id = PostId::parse(raw_id)?;

        if self.repo.find_by_id(id).await?.is_none() {
            tracing::debug!(post_id = %id, "Delete of unknown post");
            return Err(DomainError::post_not_found(id));
        }

        self.repo
            .delete_by_id(id)
            .await
            .map_err(|e| DomainError::from_repo(e, id))?;
        tracing::debug!(post_id = %id, "Post deleted");
        Ok(())
    }

    pub async fn update(&self, raw_id: &str, payload: PostPatch) -> Result<Post, DomainError> {
        let id = PostId::parse(raw_id)?;

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        payload.validate()?;
        let merged = payload.apply(existing);
        let updated = self
            .repo
            .replace_by_id(id, merged)
            .await
            .map_err(|e| DomainError::from_repo(e, id))?;
        tracing::debug!(post_id = %id, "Post updated");
        Ok(updated)
    }
}
