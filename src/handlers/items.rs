use axum::{http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use crate::{
    error::AppResult,
    extract::{ValidJson, ValidPath},
    models::Item,
};

#[derive(Debug, Deserialize)]
pub struct ItemPath {
    pub item_id: i64,
}

// ── GET /items/:item_id ───────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(("item_id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Placeholder item for the id", body = Item),
        (status = 422, description = "item_id is not an integer")
    )
)]
pub async fn read_item(
    ValidPath(ItemPath { item_id }): ValidPath<ItemPath>,
) -> AppResult<(StatusCode, Json<Item>)> {
    info!(item_id, "Read item");
    Ok((StatusCode::OK, Json(Item::placeholder(item_id))))
}

// ── POST /items ───────────────────────────────────────────────────────────────

/// Echoes the validated item back. Nothing is stored.
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = Item,
    responses(
        (status = 200, description = "The submitted item", body = Item),
        (status = 422, description = "Body is missing fields or has wrong types")
    )
)]
pub async fn create_item(
    ValidJson(item): ValidJson<Item>,
) -> AppResult<(StatusCode, Json<Item>)> {
    info!(id = item.id, name = %item.name, "Created item");
    Ok((StatusCode::OK, Json(item)))
}
