pub mod items;

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::models::{HealthStatus, MetricsSnapshot, RootStatus};

#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Service greeting", body = RootStatus))
)]
pub async fn root() -> (StatusCode, Json<RootStatus>) {
    (StatusCode::OK, Json(RootStatus::ok()))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Liveness probe", body = HealthStatus))
)]
pub async fn health() -> (StatusCode, Json<HealthStatus>) {
    (StatusCode::OK, Json(HealthStatus::healthy()))
}

// Counters are placeholders; nothing increments them.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "metrics",
    responses((status = 200, description = "Request counters", body = MetricsSnapshot))
)]
pub async fn metrics() -> (StatusCode, Json<MetricsSnapshot>) {
    (StatusCode::OK, Json(MetricsSnapshot::default()))
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

pub async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}
