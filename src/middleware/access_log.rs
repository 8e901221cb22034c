//! Access logging middleware.
//!
//! Emits one `info` event per request once the inner chain has produced a
//! response, so the logged status is the one actually sent, including 401s
//! from the API-key gate and errors raised in handlers. The timestamp comes
//! from the subscriber.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}
