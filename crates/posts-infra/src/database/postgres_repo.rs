//! PostgreSQL post store.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder};

use posts_core::domain::{NewPost, Post, PostId};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    pub(crate) db: Arc<DbConn>,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self::shared(Arc::new(db))
    }

    /// Store over a connection that is also held elsewhere (e.g. for shutdown).
    pub fn shared(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

/// Classify a write failure: constraint violations are the caller's fault.
fn write_error(e: DbErr) -> RepoError {
    match e {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::ConnectionAcquire(err) => RepoError::Connection(err.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate")
                || err_str.contains("unique")
                || err_str.contains("check constraint")
            {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

fn read_error(e: DbErr) -> RepoError {
    match e {
        DbErr::ConnectionAcquire(err) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(read_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: NewPost) -> Result<Post, RepoError> {
        let id = PostId::generate();
        tracing::debug!(post_id = %id, "Inserting post");

        let model = post::ActiveModel::from_draft(id, draft)
            .insert(self.db.as_ref())
            .await
            .map_err(write_error)?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id.as_uuid())
            .one(self.db.as_ref())
            .await
            .map_err(read_error)?;

        Ok(result.map(Into::into))
    }

    async fn replace_by_id(&self, id: PostId, post: Post) -> Result<Post, RepoError> {
        let active_model = post::ActiveModel::from(Post { id, ..post });
        let model = active_model
            .update(self.db.as_ref())
            .await
            .map_err(write_error)?;

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id.as_uuid())
            .exec(self.db.as_ref())
            .await
            .map_err(read_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
