//! Health check endpoint for service monitoring.

use axum::Json;

use super::StatusResponse;

/// Health check handler.
///
/// Does not touch the database; a 200 only means the process is serving.
///
/// # Response (200 OK)
///
/// ```json
/// { "status": "ok" }
/// ```
pub async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse::new("ok"))
}
