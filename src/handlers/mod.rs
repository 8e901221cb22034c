//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Parses path parameters and the raw JSON body
//! 2. Calls the user service
//! 3. Returns a JSON response, or an `AppError` rendered as `{"error": ...}`

use serde::Serialize;

use crate::error::AppError;

/// Liveness endpoint
pub mod health;
/// User CRUD endpoints
pub mod users;

/// `{"status": "..."}` body used for health, update and delete responses.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn new(status: &'static str) -> Self {
        Self { status }
    }
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
