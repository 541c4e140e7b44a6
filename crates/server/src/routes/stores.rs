use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::types::MessageBody;
use service::store::domain::Store;

use crate::errors::ApiError;
use crate::routes::{auth::ServerState, items::ItemBody};

pub const STORE_NOT_FOUND: &str = "Store not found";

/// Public representation of a store and its items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoreBody {
    pub name: String,
    pub items: Vec<ItemBody>,
}

impl From<Store> for StoreBody {
    fn from(store: Store) -> Self {
        Self { name: store.name, items: store.items.into_iter().map(ItemBody::from).collect() }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StoreList {
    pub stores: Vec<StoreBody>,
}

#[utoipa::path(get, path = "/store/{name}", tag = "stores",
    params(("name" = String, Path, description = "Store name")),
    responses((status = 200, description = "Store with its items", body = StoreBody),
              (status = 404, description = "Store not found", body = crate::openapi::MessageDoc)))]
pub async fn get_store(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<StoreBody>, ApiError> {
    match state.stores.get(&name).await {
        Ok(Some(store)) => Ok(Json(store.into())),
        Ok(None) => Err(ApiError::NotFound(STORE_NOT_FOUND.into())),
        Err(e) => Err(ApiError::from_service(e, STORE_NOT_FOUND, "An error occurred reading the store.")),
    }
}

#[utoipa::path(post, path = "/store/{name}", tag = "stores",
    params(("name" = String, Path, description = "Store name")),
    responses((status = 201, description = "Store created", body = StoreBody),
              (status = 400, description = "Duplicate name", body = crate::openapi::MessageDoc),
              (status = 500, description = "Insert failed", body = crate::openapi::MessageDoc)))]
pub async fn create_store(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<StoreBody>), ApiError> {
    let store = state
        .stores
        .create(&name)
        .await
        .map_err(|e| ApiError::from_service(e, STORE_NOT_FOUND, "An error occurred creating the store."))?;
    Ok((StatusCode::CREATED, Json(store.into())))
}

#[utoipa::path(delete, path = "/store/{name}", tag = "stores",
    params(("name" = String, Path, description = "Store name")),
    responses((status = 200, description = "Deleted, or nothing to delete", body = crate::openapi::MessageDoc)))]
pub async fn delete_store(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    state
        .stores
        .delete(&name)
        .await
        .map_err(|e| ApiError::from_service(e, STORE_NOT_FOUND, "An error occurred deleting the store."))?;
    Ok(Json(MessageBody::new("Store deleted")))
}

#[utoipa::path(get, path = "/stores", tag = "stores",
    responses((status = 200, description = "All stores", body = StoreList)))]
pub async fn list_stores(State(state): State<ServerState>) -> Result<Json<StoreList>, ApiError> {
    let stores = state
        .stores
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, STORE_NOT_FOUND, "An error occurred listing stores."))?;
    Ok(Json(StoreList { stores: stores.into_iter().map(StoreBody::from).collect() }))
}
