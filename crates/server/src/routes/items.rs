use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use common::types::MessageBody;
use service::auth::domain::AuthUser;
use service::item::domain::{Item, ItemInput};

use crate::errors::{ApiError, FieldErrors};
use crate::routes::auth::ServerState;

pub const ITEM_NOT_FOUND: &str = "Item not found";
const INSERT_FAILED: &str = "An error occurred inserting the item.";

/// Body of `POST`/`PUT /item/{name}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemPayload {
    pub price: Option<f64>,
    pub store_id: Option<i32>,
}

impl ItemPayload {
    fn into_input(self) -> Result<ItemInput, ApiError> {
        match (self.price, self.store_id) {
            (Some(price), Some(store_id)) => Ok(ItemInput { price, store_id }),
            (price, store_id) => {
                let mut fields = FieldErrors::default();
                if price.is_none() {
                    fields.missing("price", "This field cannot be left blank!");
                }
                if store_id.is_none() {
                    fields.missing("store_id", "Every item needs a store id.");
                }
                Err(fields.into_error())
            }
        }
    }
}

/// Public representation of an item: `{name, price}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemBody {
    pub name: String,
    pub price: f64,
}

impl From<Item> for ItemBody {
    fn from(item: Item) -> Self {
        Self { name: item.name, price: item.price }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemList {
    pub items: Vec<ItemBody>,
}

#[utoipa::path(get, path = "/item/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    responses((status = 200, description = "Item found", body = ItemBody),
              (status = 401, description = "Missing or invalid token", body = crate::openapi::UnauthorizedDoc),
              (status = 404, description = "Item not found", body = crate::openapi::MessageDoc)),
    security(("jwt" = [])))]
pub async fn get_item(
    State(state): State<ServerState>,
    Extension(user): Extension<AuthUser>,
    Path(name): Path<String>,
) -> Result<Json<ItemBody>, ApiError> {
    debug!(item = %name, requested_by = user.id, "item lookup");
    match state.items.get(&name).await {
        Ok(Some(item)) => Ok(Json(item.into())),
        Ok(None) => Err(ApiError::NotFound(ITEM_NOT_FOUND.into())),
        Err(e) => Err(ApiError::from_service(e, ITEM_NOT_FOUND, "An error occurred reading the item.")),
    }
}

#[utoipa::path(post, path = "/item/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    request_body = ItemPayload,
    responses((status = 201, description = "Item created", body = ItemBody),
              (status = 400, description = "Duplicate name or missing field", body = crate::openapi::MessageDoc),
              (status = 500, description = "Insert failed", body = crate::openapi::MessageDoc)))]
pub async fn create_item(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemBody>), ApiError> {
    let Json(payload) = payload?;
    let input = payload.into_input()?;
    let item = state
        .items
        .create(&name, input)
        .await
        .map_err(|e| ApiError::from_service(e, ITEM_NOT_FOUND, INSERT_FAILED))?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

#[utoipa::path(put, path = "/item/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    request_body = ItemPayload,
    responses((status = 200, description = "Item created or price updated", body = ItemBody),
              (status = 400, description = "Missing field", body = crate::openapi::MessageDoc)))]
pub async fn put_item(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<ItemBody>, ApiError> {
    let Json(payload) = payload?;
    let input = payload.into_input()?;
    let item = state
        .items
        .upsert(&name, input)
        .await
        .map_err(|e| ApiError::from_service(e, ITEM_NOT_FOUND, "An error occurred saving the item."))?;
    Ok(Json(item.into()))
}

#[utoipa::path(delete, path = "/item/{name}", tag = "items",
    params(("name" = String, Path, description = "Item name")),
    responses((status = 200, description = "Deleted, or nothing to delete", body = crate::openapi::MessageDoc)))]
pub async fn delete_item(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let removed = state
        .items
        .delete(&name)
        .await
        .map_err(|e| ApiError::from_service(e, ITEM_NOT_FOUND, "An error occurred deleting the item."))?;
    if removed {
        info!(item = %name, "item deleted");
    }
    Ok(Json(MessageBody::new("Item deleted")))
}

#[utoipa::path(get, path = "/items", tag = "items",
    responses((status = 200, description = "All items", body = ItemList)))]
pub async fn list_items(State(state): State<ServerState>) -> Result<Json<ItemList>, ApiError> {
    let items = state
        .items
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, ITEM_NOT_FOUND, "An error occurred listing items."))?;
    Ok(Json(ItemList { items: items.into_iter().map(ItemBody::from).collect() }))
}
