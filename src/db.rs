//! Database connection pool management.
//!
//! The `users` table is provisioned outside this service:
//!
//! ```sql
//! CREATE TABLE users (
//!     id         SERIAL PRIMARY KEY,
//!     name       TEXT        NOT NULL,
//!     email      TEXT        NOT NULL,
//!     age        INTEGER     NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The pool is shared by every request; concurrency control on rows is left to
/// PostgreSQL itself.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - Cannot connect to PostgreSQL server
/// - Database authentication fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
