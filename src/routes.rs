//! Router construction and middleware composition.

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::{
    handlers::{self, health, users},
    middleware::{
        access_log::access_log,
        auth::{ApiKey, require_api_key},
    },
    services::UserService,
};

/// Build the full application router.
///
/// Layers, outermost first:
/// 1. access log
/// 2. API-key gate
/// 3. panic catcher
/// 4. routes and fallbacks
///
/// The fallbacks sit inside the chain, so unknown paths and unsupported
/// methods are gated and logged like everything else. `/health` is gated too.
///
/// axum answers `HEAD` with the `GET` handler unless a `HEAD` handler exists,
/// so the GET-only routes register one that returns 405.
///
/// Everything below `/users/` goes to one handler that validates the id
/// before the method; a catch-all never matches an empty segment, so bare
/// `/users/` has its own route.
pub fn build_router(service: UserService, api_key: ApiKey) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::health_check)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/users",
            get(users::list_users)
                .head(handlers::method_not_allowed)
                .post(users::create_user)
                .fallback(handlers::method_not_allowed),
        )
        .route("/users/", any(users::missing_user_id))
        .route("/users/{*id}", any(users::user_by_id))
        .fallback(handlers::route_not_found)
        .with_state(service)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(access_log))
                .layer(middleware::from_fn_with_state(api_key, require_api_key))
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

fn panic_response(_: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": "internal error" })),
    )
        .into_response()
}
