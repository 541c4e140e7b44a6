use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{error, warn};

use service::errors::ServiceError;

/// HTTP-facing error. The only place that decides status codes and error bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with `{"message": "..."}`.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 400 with `{"message": {"field": "..."}}`.
    #[error("invalid fields: {0:?}")]
    InvalidFields(Map<String, Value>),
    #[error("not found: {0}")]
    NotFound(String),
    /// 401 in the `{"description", "error", "status_code"}` shape.
    #[error("{error}: {description}")]
    Unauthorized { error: &'static str, description: String },
    /// 500 with a fixed message; the cause is logged where the error is built.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn unauthorized(error: &'static str, description: impl Into<String>) -> Self {
        Self::Unauthorized { error, description: description.into() }
    }

    /// Logs `cause` and hides it behind `message`.
    pub fn internal(message: &str, cause: impl std::fmt::Display) -> Self {
        error!(error = %cause, "{}", message);
        Self::Internal(message.to_string())
    }

    /// Maps a service failure; `internal_message` is what a 500 carries.
    pub fn from_service(e: ServiceError, not_found_message: &str, internal_message: &str) -> Self {
        match e {
            ServiceError::Conflict(msg) | ServiceError::Validation(msg) => Self::BadRequest(msg),
            ServiceError::NotFound(_) => Self::NotFound(not_found_message.to_string()),
            ServiceError::Db(cause) => Self::internal(internal_message, cause),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected request body");
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(json!({ "message": msg }))).into_response(),
            ApiError::InvalidFields(fields) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": fields }))).into_response()
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(json!({ "message": msg }))).into_response(),
            ApiError::Unauthorized { error, description } => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "description": description, "error": error, "status_code": 401 })),
            )
                .into_response(),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": msg }))).into_response()
            }
        }
    }
}

/// Collects per-field "missing" messages for request payloads.
#[derive(Default)]
pub struct FieldErrors(Map<String, Value>);

impl FieldErrors {
    pub fn missing(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), Value::String(message.to_string()));
    }

    pub fn into_error(self) -> ApiError {
        ApiError::InvalidFields(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(e: ApiError) -> (StatusCode, Value) {
        let res = e.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap_or_default();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn unauthorized_uses_jwt_error_shape() {
        let (status, body) = body_of(ApiError::unauthorized("Bad Request", "Invalid credentials")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"description": "Invalid credentials", "error": "Bad Request", "status_code": 401}));
    }

    #[tokio::test]
    async fn field_errors_nest_under_message() {
        let mut fields = FieldErrors::default();
        fields.missing("price", "This field cannot be left blank!");
        let (status, body) = body_of(fields.into_error()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": {"price": "This field cannot be left blank!"}}));
    }

    #[tokio::test]
    async fn db_failures_hide_the_cause() {
        let e = ApiError::from_service(ServiceError::Db("disk I/O".into()), "Item not found", "An error occurred inserting the item.");
        let (status, body) = body_of(e).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "An error occurred inserting the item."}));
    }
}
