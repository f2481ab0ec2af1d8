use serde::Serialize;

use super::PostId;
use crate::error::DomainError;

/// Post entity - a blog-post-like record with a title and metadata counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<i64>,
}

/// A validated post that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub topic: Option<String>,
    pub type2: Option<String>,
    pub date: Option<String>,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
}

impl NewPost {
    /// Attach the identifier assigned by the store.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            topic: self.topic,
            type2: self.type2,
            date: self.date,
            views: Some(self.views),
            likes: Some(self.likes),
            comments: Some(self.comments),
        }
    }
}

/// Partial post input. Every field is optional; `None` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub topic: Option<String>,
    pub type2: Option<String>,
    pub date: Option<String>,
    pub views: Option<i64>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
}

impl PostPatch {
    /// Check the fields that were supplied.
    ///
    /// A supplied title must be non-empty and supplied counters must not be
    /// negative. Absent fields are always fine here.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title
            && title.is_empty()
        {
            return Err(DomainError::Validation("title cannot be empty".to_string()));
        }

        for (name, value) in [
            ("views", self.views),
            ("likes", self.likes),
            ("comments", self.comments),
        ] {
            if let Some(v) = value
                && v < 0
            {
                return Err(DomainError::Validation(format!(
                    "{name} must not be negative"
                )));
            }
        }

        Ok(())
    }

    /// Turn a create payload into a draft: title is required, counters default to 0.
    pub fn into_new_post(self) -> Result<NewPost, DomainError> {
        self.validate()?;

        let title = self
            .title
            .ok_or_else(|| DomainError::Validation("title is required".to_string()))?;

        Ok(NewPost {
            title,
            topic: self.topic,
            type2: self.type2,
            date: self.date,
            views: self.views.unwrap_or(0),
            likes: self.likes.unwrap_or(0),
            comments: self.comments.unwrap_or(0),
        })
    }

    /// Merge onto an existing record: supplied fields win, the rest are kept.
    /// The id always comes from `existing`.
    pub fn apply(self, existing: Post) -> Post {
        Post {
            id: existing.id,
            title: self.title.unwrap_or(existing.title),
            topic: self.topic.or(existing.topic),
            type2: self.type2.or(existing.type2),
            date: self.date.or(existing.date),
            views: self.views.or(existing.views),
            likes: self.likes.or(existing.likes),
            comments: self.comments.or(existing.comments),
        }
    }
}
