use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::types::MessageBody;
use service::auth::{
    domain::{LoginInput, RegisterInput},
    errors::AuthError,
    repo::seaorm::SeaOrmAuthRepository,
    service::{AuthConfig, AuthService},
};
use service::item::{repository::SeaOrmItemRepository, ItemService};
use service::store::{repository::SeaOrmStoreRepository, StoreService};

use crate::errors::{ApiError, FieldErrors};

#[derive(Clone)]
pub struct ServerAuthConfig {
    /// Scheme word expected before the token, e.g. `JWT`.
    pub header_prefix: String,
}

/// Shared handler state: one connection pool, services built over it.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
    pub auth_svc: Arc<AuthService<SeaOrmAuthRepository>>,
    pub items: Arc<ItemService<SeaOrmItemRepository>>,
    pub stores: Arc<StoreService<SeaOrmStoreRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, cfg: &configs::AuthConfig) -> Self {
        let auth_svc = AuthService::new(
            Arc::new(SeaOrmAuthRepository { db: db.clone() }),
            AuthConfig::new(cfg.jwt_secret.clone(), cfg.token_ttl_secs),
        );
        Self {
            auth: ServerAuthConfig { header_prefix: cfg.header_prefix.clone() },
            auth_svc: Arc::new(auth_svc),
            items: Arc::new(ItemService::new(Arc::new(SeaOrmItemRepository { db: db.clone() }))),
            stores: Arc::new(StoreService::new(Arc::new(SeaOrmStoreRepository { db: db.clone() }))),
            db,
        }
    }
}

/// Body of `/register` and `/auth`. Fields are optional so missing ones can be reported by name.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserPayload {
    fn into_parts(self) -> Result<(String, String), ApiError> {
        match (self.username, self.password) {
            (Some(username), Some(password)) => Ok((username, password)),
            (username, password) => {
                let mut fields = FieldErrors::default();
                if username.is_none() {
                    fields.missing("username", "This field cannot be blank.");
                }
                if password.is_none() {
                    fields.missing("password", "This field cannot be blank.");
                }
                Err(fields.into_error())
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenBody {
    pub access_token: String,
}

pub const USER_EXISTS: &str = "A user with that username already exists";

#[utoipa::path(post, path = "/register", tag = "auth", request_body = UserPayload,
    responses((status = 201, description = "User created", body = crate::openapi::MessageDoc),
              (status = 400, description = "Duplicate username or missing field", body = crate::openapi::MessageDoc)))]
pub async fn register(
    State(state): State<ServerState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let Json(payload) = payload?;
    let (username, password) = payload.into_parts()?;
    match state.auth_svc.register(RegisterInput { username, password }).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "user registered");
            Ok((StatusCode::CREATED, Json(MessageBody::new("User created successfully."))))
        }
        Err(AuthError::Conflict) => Err(ApiError::BadRequest(USER_EXISTS.into())),
        Err(AuthError::Validation(msg)) => Err(ApiError::BadRequest(msg)),
        Err(e) => Err(ApiError::internal("An error occurred creating the user.", e)),
    }
}

#[utoipa::path(post, path = "/auth", tag = "auth", request_body = UserPayload,
    responses((status = 200, description = "Access token issued", body = TokenBody),
              (status = 401, description = "Invalid credentials", body = crate::openapi::UnauthorizedDoc)))]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<TokenBody>, ApiError> {
    let Json(payload) = payload?;
    let (username, password) = payload.into_parts()?;
    match state.auth_svc.login(LoginInput { username, password }).await {
        Ok(session) => Ok(Json(TokenBody { access_token: session.token })),
        Err(AuthError::Unauthorized) => Err(ApiError::unauthorized("Bad Request", "Invalid credentials")),
        Err(e) => Err(ApiError::internal("An error occurred during authentication.", e)),
    }
}

/// Splits `Authorization: <prefix> <token>` and returns the token.
pub fn parse_authorization<'a>(header: &'a str, prefix: &str) -> Result<&'a str, ApiError> {
    let parts: Vec<&str> = header.split_whitespace().collect();
    match parts.as_slice() {
        [scheme, ..] if !scheme.eq_ignore_ascii_case(prefix) => {
            Err(ApiError::unauthorized("Invalid JWT header", "Unsupported authorization type"))
        }
        [] | [_] => Err(ApiError::unauthorized("Invalid JWT header", "Token missing")),
        [_, token] => Ok(token),
        _ => Err(ApiError::unauthorized("Invalid JWT header", "Token contains spaces")),
    }
}

/// Route middleware: requires `Authorization: <prefix> <token>` and stores the
/// resolved [`service::auth::domain::AuthUser`] in request extensions.
pub async fn require_jwt(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let token = {
        let Some(header) = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
            tracing::warn!(path = %path, "missing Authorization header");
            return Err(ApiError::unauthorized(
                "Authorization Required",
                "Request does not contain an access token",
            ));
        };
        parse_authorization(header, &state.auth.header_prefix)
            .inspect_err(|_| tracing::warn!(path = %path, "malformed Authorization header"))?
            .to_string()
    };

    let user = state.auth_svc.authenticate_token(&token).await.map_err(|e| {
        tracing::warn!(path = %path, err = %e, "token validation failed");
        match e {
            AuthError::TokenError(msg) => ApiError::unauthorized("Invalid token", msg),
            AuthError::Unauthorized => ApiError::unauthorized("Invalid JWT", "User does not exist"),
            other => ApiError::internal("An error occurred validating the token.", other),
        }
    })?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
