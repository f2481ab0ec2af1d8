//! Domain entities - the core business objects.

mod id;
mod post;

pub use id::PostId;
pub use post::{NewPost, Post, PostPatch};
