//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use posts_core::domain::{NewPost, Post, PostId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub topic: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub type2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub date: Option<String>,
    pub views: Option<i64>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: PostId::from(model.id),
            title: model.title,
            topic: model.topic,
            type2: model.type2,
            date: model.date,
            views: model.views,
            likes: model.likes,
            comments: model.comments,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel. Every column is set,
/// so an update through this model replaces the whole row.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id.as_uuid()),
            title: Set(post.title),
            topic: Set(post.topic),
            type2: Set(post.type2),
            date: Set(post.date),
            views: Set(post.views),
            likes: Set(post.likes),
            comments: Set(post.comments),
        }
    }
}

impl ActiveModel {
    /// Active model for a draft stored under `id`.
    pub fn from_draft(id: PostId, draft: NewPost) -> Self {
        draft.into_post(id).into()
    }
}
