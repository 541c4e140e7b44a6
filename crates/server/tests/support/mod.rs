#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sea_orm::DatabaseConnection;
use tower::Service;

use configs::{AuthConfig, DatabaseConfig};
use server::routes::{self, auth::ServerState};

pub const TEST_SECRET: &str = "test-secret";

pub fn auth_config() -> AuthConfig {
    AuthConfig { jwt_secret: TEST_SECRET.into(), ..AuthConfig::default() }
}

/// Router over a fresh, migrated in-memory database.
pub async fn build_app() -> anyhow::Result<Router> {
    Ok(build_app_with_db().await?.0)
}

/// Same as [`build_app`], also handing back the connection for direct seeding.
pub async fn build_app_with_db() -> anyhow::Result<(Router, DatabaseConnection)> {
    let db = models::db::connect_and_migrate(&DatabaseConfig::in_memory()).await?;
    let state = ServerState::new(db.clone(), &auth_config());
    Ok((routes::build_router(state, server::startup::build_cors()), db))
}

/// Drive one request through the router and decode the JSON reply.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    authorization: Option<&str>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(authz) = authorization {
        builder = builder.header(header::AUTHORIZATION, authz);
    }
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let res = app.clone().call(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

/// Register `test`/`1234`, log in, and return the ready-to-use header value.
pub async fn authorization(app: &Router) -> anyhow::Result<String> {
    let creds = json!({"username": "test", "password": "1234"});
    let (status, _) = send(app, Method::POST, "/register", Some(creds.clone()), None).await?;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(app, Method::POST, "/auth", Some(creds), None).await?;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap_or_default().to_string();
    assert!(!token.is_empty());
    Ok(format!("JWT {}", token))
}
