//! Storage contract for users.
//!
//! Handlers and services only ever see [`UserRepository`]; the PostgreSQL
//! implementation lives in [`postgres`]. Any type satisfying the trait can be
//! swapped in, which is how the tests run without a database.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::user::{NewUser, User};

pub mod postgres;

pub use postgres::PgUserRepository;

/// CRUD operations over the `users` table.
///
/// # Errors
///
/// Every method returns [`AppError::UserNotFound`] when the id matches no row
/// and [`AppError::Internal`] for any other storage failure. No other variant
/// is produced here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by ascending id. Empty when the table is empty.
    async fn get_users(&self) -> Result<Vec<User>, AppError>;

    async fn get_user_by_id(&self, id: i32) -> Result<User, AppError>;

    /// Inserts a user and returns the id assigned by the store.
    ///
    /// The store also assigns `created_at`.
    async fn create_user(&self, user: NewUser) -> Result<i32, AppError>;

    /// Replaces name, email and age of an existing user.
    async fn update_user(&self, id: i32, user: NewUser) -> Result<(), AppError>;

    /// Hard-deletes a user and returns the number of rows removed.
    async fn delete_user_by_id(&self, id: i32) -> Result<u64, AppError>;
}

/// Run a storage call under its own deadline, on its own task.
///
/// The deadline starts when this is called and is unrelated to the lifetime of
/// the inbound request. The call is spawned, so dropping the caller (for
/// example when the client disconnects) does not cancel it: it runs until it
/// completes or the deadline fires.
pub(crate) async fn with_timeout<T, F>(limit: Duration, call: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: Future<Output = Result<T, AppError>> + Send + 'static,
{
    tokio::spawn(tokio::time::timeout(limit, call))
        .await
        .map_err(|err| {
            AppError::Internal(anyhow::Error::new(err).context("database task failed"))
        })??
}
