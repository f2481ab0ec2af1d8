//! Post handlers.
//!
//! Thin adapters between HTTP and [`PostService`](posts_core::PostService):
//! decode the body, call the service, encode the result.

use actix_web::{HttpResponse, web};

use posts_core::domain::{Post, PostPatch};
use posts_shared::{PostPayload, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Body extractor settings: undecodable JSON is a bare 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("invalid request body: {}", err)).into()
    })
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(to_patch(body.into_inner())).await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/posts/{id}
///
/// A missing or blank body is an empty patch and leaves the post unchanged.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let payload = update_payload(&body)?;
    let post = state
        .posts
        .update(&path.into_inner(), to_patch(payload))
        .await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

fn update_payload(body: &[u8]) -> AppResult<PostPayload> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PostPayload::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {}", e)))
}

fn to_patch(payload: PostPayload) -> PostPatch {
    PostPatch {
        title: payload.title,
        topic: payload.topic,
        type2: payload.type2,
        date: payload.date,
        views: payload.views,
        likes: payload.likes,
        comments: payload.comments,
    }
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        topic: post.topic,
        type2: post.type2,
        date: post.date,
        views: post.views,
        likes: post.likes,
        comments: post.comments,
    }
}
