//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// Every field is optional on the wire; create additionally requires `title`.
/// Unknown fields are ignored and `null` counts as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
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

/// A persisted post as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<i64>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_unknown_fields() {
        let payload: PostPayload = serde_json::from_str(
            r#"{"title": "New_post_Title_test", "dateCreated": "2021-01-30", "views": 999}"#,
        )
        .unwrap();

        assert_eq!(payload.title.as_deref(), Some("New_post_Title_test"));
        assert_eq!(payload.views, Some(999));
        assert_eq!(payload.date, None);
    }

    #[test]
    fn null_counts_as_absent() {
        let payload: PostPayload = serde_json::from_str(r#"{"topic": null}"#).unwrap();
        assert_eq!(payload.topic, None);
    }

    #[test]
    fn payload_rejects_non_numeric_counter() {
        let result = serde_json::from_str::<PostPayload>(r#"{"title": "t", "likes": "many"}"#);
        assert!(result.is_err());
    }
}
