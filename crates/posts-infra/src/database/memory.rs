//! In-memory post store - used when no database is configured, and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::{NewPost, Post, PostId};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

/// Post store backed by a `Vec` behind an async RwLock.
///
/// Posts are kept in insertion order. Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    fn check_title(title: &str) -> Result<(), RepoError> {
        if title.is_empty() {
            return Err(RepoError::Constraint("title must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn insert(&self, draft: NewPost) -> Result<Post, RepoError> {
        Self::check_title(&draft.title)?;

        let post = draft.into_post(PostId::generate());
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn replace_by_id(&self, id: PostId, post: Post) -> Result<Post, RepoError> {
        Self::check_title(&post.title)?;

        let mut posts = self.posts.write().await;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        *slot = Post { id, ..post };
        Ok(slot.clone())
    }

    async fn delete_by_id(&self, id: PostId) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, counters: (i64, i64, i64)) -> NewPost {
        NewPost {
            title: title.to_string(),
            topic: None,
            type2: None,
            date: None,
            views: counters.0,
            likes: counters.1,
            comments: counters.2,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids_and_keeps_order() {
        let repo = InMemoryPostRepository::new();
        let a = repo.insert(draft("a", (1, 2, 3))).await.unwrap();
        let b = repo.insert(draft("b", (0, 0, 0))).await.unwrap();

        assert_ne!(a.id, b.id);
        let titles: Vec<_> = repo.list().await.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_title() {
        let repo = InMemoryPostRepository::new();
        let result = repo.insert(draft("", (0, 0, 0))).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_keeps_id() {
        let repo = InMemoryPostRepository::new();
        let stored = repo.insert(draft("a", (1, 2, 3))).await.unwrap();

        let replaced = repo
            .replace_by_id(
                stored.id,
                Post {
                    id: PostId::generate(),
                    title: "b".to_string(),
                    ..stored.clone()
                },
            )
            .await
            .unwrap();

        assert_eq!(replaced.id, stored.id);
        assert_eq!(repo.find_by_id(stored.id).await.unwrap().unwrap().title, "b");
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let ghost = draft("ghost", (0, 0, 0)).into_post(PostId::generate());

        assert!(repo.find_by_id(ghost.id).await.unwrap().is_none());
        assert!(matches!(
            repo.replace_by_id(ghost.id, ghost.clone()).await,
            Err(RepoError::NotFound)
        ));
        assert!(matches!(
            repo.delete_by_id(ghost.id).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = InMemoryPostRepository::new();
        let a = repo.insert(draft("a", (0, 0, 0))).await.unwrap();
        repo.insert(draft("b", (0, 0, 0))).await.unwrap();

        repo.delete_by_id(a.id).await.unwrap();

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "b");
    }
}
