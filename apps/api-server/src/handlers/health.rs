//! Health check endpoint.

use actix_web::{HttpResponse, web};

use posts_shared::HealthResponse;

use crate::state::AppState;

/// Health check endpoint - reports server and store status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let status = if state.store_healthy().await {
        "ok"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store_kind().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
