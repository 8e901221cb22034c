//! API key authentication middleware.
//!
//! Every request must carry an `X-API-KEY` header equal to the configured
//! secret. Requests without it never reach the router.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The configured shared secret, held as a SHA-256 digest.
///
/// Presented keys are hashed the same way and compared digest to digest, so
/// the comparison always covers 32 bytes whatever the input length.
#[derive(Clone)]
pub struct ApiKey {
    digest: [u8; 32],
}

impl ApiKey {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: Sha256::digest(secret.as_bytes()).into(),
        }
    }

    /// True when `presented` is non-empty and equals the configured secret.
    pub fn matches(&self, presented: &str) -> bool {
        if presented.is_empty() {
            return false;
        }
        let presented: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        presented == self.digest
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Read the `X-API-KEY` header
/// 2. If it is missing, not valid UTF-8, empty or wrong: return 401 without
///    calling `next`
/// 3. Otherwise call the next middleware/handler
///
/// # Returns
///
/// - `Ok(Response)` from the downstream chain
/// - `Err(AppError::Unauthorized)`, rendered as `401 {"error":"unauthorized"}`
pub async fn require_api_key(
    State(api_key): State<ApiKey>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    if !api_key.matches(presented) {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
