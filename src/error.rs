//! Error types and HTTP error response handling.
//!
//! This module defines the error kinds shared by every layer and how they are
//! converted into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// The repository, service and handler layers all speak this type. Callers
/// dispatch on the variant, never on the message text.
///
/// # Error Categories
///
/// - **Validation**: malformed body, empty name, bad path id
/// - **Authentication**: missing or wrong `X-API-KEY`
/// - **Resource**: the requested user does not exist
/// - **Routing**: unknown path or unsupported method
/// - **Internal**: any storage failure, including timeouts
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or path parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request with the contained message.
    #[error("{0}")]
    InvalidRequest(String),

    /// API key header is missing or does not match.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("unauthorized")]
    Unauthorized,

    /// No user row matched the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("user not found")]
    UserNotFound,

    /// No route matched the request path.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("not found")]
    RouteNotFound,

    /// The path matched but the HTTP method is not served there.
    ///
    /// Returns HTTP 405 Method Not Allowed.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Opaque failure from storage or anything else below the handlers.
    ///
    /// Returns HTTP 500. The wrapped error is logged, never sent to the client.
    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl AppError {
    pub fn invalid_json() -> Self {
        Self::InvalidRequest("invalid json".to_string())
    }

    pub fn name_required() -> Self {
        Self::InvalidRequest("name is required".to_string())
    }

    pub fn invalid_id() -> Self {
        Self::InvalidRequest("invalid id".to_string())
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err).context("database query failed"))
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Internal(anyhow::Error::new(err).context("database query timed out"))
    }
}

/// Convert AppError into an HTTP response.
///
/// All errors return JSON in this format:
/// ```json
/// { "error": "user not found" }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::Internal(ref err) => {
                tracing::error!("{err:#}");
                "internal error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
