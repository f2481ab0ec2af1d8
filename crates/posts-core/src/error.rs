//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: PostId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    pub fn post_not_found(id: PostId) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            id,
        }
    }

    /// Lift a store failure for an operation on `id` into the domain.
    pub fn from_repo(err: RepoError, id: PostId) -> Self {
        match err {
            RepoError::NotFound => Self::post_not_found(id),
            other => other.into(),
        }
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => DomainError::Validation(msg),
            RepoError::NotFound => {
                DomainError::Internal("store reported a missing record".to_string())
            }
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Internal(msg),
        }
    }
}
