//! Business logic services.
//!
//! Services sit between HTTP handlers and the repository contract. Handlers
//! never talk to storage directly.

pub mod user_service;

pub use user_service::UserService;
