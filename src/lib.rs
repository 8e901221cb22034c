//! User Service
//!
//! A REST API exposing create, read, update and delete operations for a single
//! `users` resource, guarded by a static API key.
//!
//! # Architecture
//!
//! Requests flow through these layers, and errors flow back up the same way:
//!
//! - **Middleware** ([`middleware`]): access log, then API-key gate
//! - **Handlers** ([`handlers`]): routing, body decoding, status mapping
//! - **Services** ([`services`]): use-case seam over the repository
//! - **Repository** ([`repository`]): storage contract plus the PostgreSQL
//!   implementation, each call under its own timeout
//!
//! [`error::AppError`] is the one error type shared by all of them.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use error::AppError;
