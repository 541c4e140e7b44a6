pub mod auth;
pub mod items;
pub mod stores;

use axum::{
    extract::State,
    handler::Handler,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Service and database reachable", body = crate::openapi::HealthDoc),
              (status = 503, description = "Database unreachable", body = crate::openapi::HealthDoc)))]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            tracing::error!(error = %e, "database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "unavailable" }))
        }
    }
}

/// Build the full application router. Only `GET /item/{name}` requires a token.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let get_item = items::get_item.layer(middleware::from_fn_with_state(state.clone(), auth::require_jwt));

    let item_routes = Router::new()
        .route(
            "/item/:name",
            get(get_item)
                .post(items::create_item)
                .put(items::put_item)
                .delete(items::delete_item),
        )
        .route("/items", get(items::list_items));

    let store_routes = Router::new()
        .route(
            "/store/:name",
            get(stores::get_store).post(stores::create_store).delete(stores::delete_store),
        )
        .route("/stores", get(stores::list_stores));

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/auth", post(auth::login));

    Router::new()
        .route("/health", get(health))
        .merge(item_routes)
        .merge(store_routes)
        .merge(auth_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
