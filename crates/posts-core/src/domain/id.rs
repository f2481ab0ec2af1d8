use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;

/// Store-assigned post identifier.
///
/// New ids are UUID v7, so sorting by id follows creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// Mint a fresh identifier. Only stores should call this.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse an identifier from a request path segment.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| DomainError::MalformedIdentifier(raw.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
