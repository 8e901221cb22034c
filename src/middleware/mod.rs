//! HTTP middleware components.
//!
//! Middleware wrap the router in a fixed order, outermost first:
//! 1. `access_log` - one log line per request, written after the response
//! 2. `auth` - static API-key gate, short-circuits with 401
//!
//! See `routes::build_router` for the composition.

/// Per-request access logging
pub mod access_log;
/// Static API key authentication middleware
pub mod auth;
