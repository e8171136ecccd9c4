//! Liveness endpoints.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::schemas::chat::{HealthResponse, RootResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(root, get_health), components(schemas(RootResponse, HealthResponse)))]
pub struct HealthApi;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(get_health))
}

/// Reachability check polled by the frontend.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is running", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse { message: "MyDoc API is running".into() })
}

/// Heartbeat for load balancers.
///
/// Always HTTP 200; `provider_configured` reports whether chat requests can
/// succeed at all.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Server is healthy", body = HealthResponse))
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        provider_configured: state.provider_configured(),
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
