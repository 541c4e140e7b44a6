mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;

use support::{authorization, build_app, build_app_with_db, send};

#[tokio::test]
async fn get_item_without_token_is_unauthorized() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, Method::GET, "/item/test", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authorization Required");
    assert_eq!(body["status_code"], 401);
    Ok(())
}

#[tokio::test]
async fn get_missing_item_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let authz = authorization(&app).await?;
    let (status, body) = send(&app, Method::GET, "/item/test", None, Some(&authz)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Item not found"}));
    Ok(())
}

#[tokio::test]
async fn get_stored_item() -> anyhow::Result<()> {
    let (app, db) = build_app_with_db().await?;
    let authz = authorization(&app).await?;
    send(&app, Method::POST, "/store/test", None, None).await?;
    models::item::create(&db, "test", 1.1, 1).await?;

    let (status, body) = send(&app, Method::GET, "/item/test", None, Some(&authz)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "test", "price": 1.1}));
    Ok(())
}

#[tokio::test]
async fn delete_item_always_acknowledges() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, Method::POST, "/store/test", None, None).await?;

    let (status, body) = send(&app, Method::DELETE, "/item/test", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Item deleted"}));

    send(&app, Method::POST, "/item/test", Some(json!({"price": 1.1, "store_id": 1})), None).await?;
    let (status, body) = send(&app, Method::DELETE, "/item/test", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Item deleted"}));

    let (_, body) = send(&app, Method::GET, "/items", None, None).await?;
    assert_eq!(body, json!({"items": []}));
    Ok(())
}

#[tokio::test]
async fn create_item() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, Method::POST, "/store/test", None, None).await?;

    let (status, body) =
        send(&app, Method::POST, "/item/test", Some(json!({"price": 1.1, "store_id": 1})), None).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"name": "test", "price": 1.1}));
    Ok(())
}

#[tokio::test]
async fn create_duplicate_item_is_rejected() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, Method::POST, "/store/test", None, None).await?;
    send(&app, Method::POST, "/item/test", Some(json!({"price": 1.1, "store_id": 1})), None).await?;

    let (status, body) =
        send(&app, Method::POST, "/item/test", Some(json!({"price": 1.1, "store_id": 1})), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "An item with name 'test' already exists."}));
    Ok(())
}

#[tokio::test]
async fn create_item_for_unknown_store_fails_insert() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) =
        send(&app, Method::POST, "/item/test", Some(json!({"price": 1.1, "store_id": 42})), None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "An error occurred inserting the item."}));
    Ok(())
}

#[tokio::test]
async fn put_creates_missing_item() -> anyhow::Result<()> {
    let (app, db) = build_app_with_db().await?;
    send(&app, Method::POST, "/store/test", None, None).await?;

    let (status, body) =
        send(&app, Method::PUT, "/item/test", Some(json!({"price": 1.1, "store_id": 1})), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "test", "price": 1.1}));
    let stored = models::item::find_by_name(&db, "test").await?;
    assert_eq!(stored.map(|i| i.price), Some(1.1));
    Ok(())
}

#[tokio::test]
async fn put_updates_existing_price() -> anyhow::Result<()> {
    let (app, db) = build_app_with_db().await?;
    send(&app, Method::POST, "/store/test", None, None).await?;
    models::item::create(&db, "test", 100.0, 1).await?;
    assert_eq!(models::item::find_by_name(&db, "test").await?.map(|i| i.price), Some(100.0));

    let (status, body) =
        send(&app, Method::PUT, "/item/test", Some(json!({"price": 1.1, "store_id": 1})), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "test", "price": 1.1}));
    assert_eq!(models::item::find_by_name(&db, "test").await?.map(|i| i.price), Some(1.1));

    let authz = authorization(&app).await?;
    let (_, body) = send(&app, Method::GET, "/item/test", None, Some(&authz)).await?;
    assert_eq!(body["price"], 1.1);
    Ok(())
}

#[tokio::test]
async fn item_list() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, Method::POST, "/store/test", None, None).await?;
    send(&app, Method::POST, "/item/test", Some(json!({"price": 1.1, "store_id": 1})), None).await?;

    let (status, body) = send(&app, Method::GET, "/items", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"items": [{"name": "test", "price": 1.1}]}));
    Ok(())
}

#[tokio::test]
async fn missing_fields_are_reported_per_field() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, Method::POST, "/item/test", Some(json!({"store_id": 1})), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": {"price": "This field cannot be left blank!"}}));

    let (status, body) = send(&app, Method::PUT, "/item/test", Some(json!({"price": 2.0})), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": {"store_id": "Every item needs a store id."}}));
    Ok(())
}

#[tokio::test]
async fn body_that_is_not_json_is_rejected() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, Method::POST, "/item/test", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
    Ok(())
}
