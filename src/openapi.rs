use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthStatus, Item, MetricsSnapshot, RootStatus};

#[derive(OpenApi)]
#[openapi(
    info(title = "multi-cloud-devsecops-sample"),
    paths(
        handlers::root,
        handlers::health,
        handlers::metrics,
        handlers::items::read_item,
        handlers::items::create_item
    ),
    components(schemas(Item, RootStatus, HealthStatus, MetricsSnapshot)),
    tags(
        (name = "root"),
        (name = "health"),
        (name = "metrics"),
        (name = "items")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
