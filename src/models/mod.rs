//! Data models representing database entities and request bodies.

/// User entity and request payloads
pub mod user;
