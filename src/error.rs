// HTTP API error types and their wire representation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::auth::AuthError;
use crate::store::StoreError;

/// Everything a handler can fail with, mapped onto the fixed response
/// contract: a JSON body `{"error": <message>}` plus a status code.
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed schema validation before any upstream call.
    BadRequest(String),
    /// Basket reservation asked for more than the product has in stock.
    InsufficientStock,
    /// Unmatched route or unsupported method on a matched route.
    MethodNotAllowed,
    /// Store or auth call failed; the upstream message is surfaced verbatim.
    Upstream(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InsufficientStock => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::InsufficientStock => "Not enough stock available",
            ApiError::MethodNotAllowed => "Method not allowed",
            ApiError::Upstream(msg) => msg,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!("store call failed: {}", err);
        ApiError::Upstream(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::error!("auth call failed: {}", err);
        ApiError::Upstream(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.message() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
