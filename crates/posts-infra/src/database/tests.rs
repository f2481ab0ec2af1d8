use std::sync::Arc;

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use posts_core::domain::{NewPost, Post, PostId};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

use crate::database::DatabaseConnections;
use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: Uuid, title: &str, counters: (i64, i64, i64)) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        topic: Some("Topic_test".to_owned()),
        type2: Some("Type2_test".to_owned()),
        date: Some("2015-02-11".to_owned()),
        views: Some(counters.0),
        likes: Some(counters.1),
        comments: Some(counters.2),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::now_v7();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(post_id, "Title_test", (5, 4, 3))]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(PostId::from(post_id)).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Title_test");
    assert_eq!(post.id, PostId::from(post_id));
    assert_eq!(post.views, Some(5));
}

#[tokio::test]
async fn test_list_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            model(Uuid::now_v7(), "Title_test", (5, 4, 3)),
            model(Uuid::now_v7(), "Title2_test", (15, 14, 13)),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.list().await.unwrap();

    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Title_test", "Title2_test"]);
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let stored_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(stored_id, "New_post_Title_test", (0, 0, 0))]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let draft = NewPost {
        title: "New_post_Title_test".to_owned(),
        topic: Some("Topic_test".to_owned()),
        type2: Some("Type2_test".to_owned()),
        date: Some("2015-02-11".to_owned()),
        views: 0,
        likes: 0,
        comments: 0,
    };

    let post = repo.insert(draft).await.unwrap();
    assert_eq!(post.id, PostId::from(stored_id));
    assert_eq!(post.likes, Some(0));
}

#[tokio::test]
async fn test_replace_of_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let ghost: Post = model(Uuid::now_v7(), "ghost", (0, 0, 0)).into();

    let result = repo.replace_by_id(ghost.id, ghost.clone()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_with_no_rows_affected_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = repo.delete_by_id(PostId::generate()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_existing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.delete_by_id(PostId::generate()).await.is_ok());
}

#[tokio::test]
async fn test_shared_connection_serves_store_then_closes() {
    let post_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(post_id, "Title_test", (5, 4, 3))]])
        .into_connection();

    let connections = DatabaseConnections { main: Arc::new(db) };
    let repo = PostgresPostRepository::shared(connections.main.clone());

    let found = repo.find_by_id(PostId::from(post_id)).await.unwrap();
    assert!(found.is_some());

    assert!(connections.close().await.is_ok());
}
