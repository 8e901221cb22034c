//! User data model and API request types.
//!
//! This module defines:
//! - `User`: the stored entity, also the response body for reads
//! - `UserPayload`: request body for create and update
//! - `NewUser`: a validated payload, ready to hand to the repository

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Represents a user record from the database.
///
/// `id` and `created_at` are assigned by the store on insert and never change.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Alice",
///   "email": "a@x.com",
///   "age": 20,
///   "created_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, always positive
    pub id: i32,

    /// Display name, never empty
    pub name: String,

    /// Contact email, not validated here
    pub email: String,

    pub age: i32,

    /// Timestamp when the row was inserted
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /users` and `PUT|PATCH /users/{id}`.
///
/// Missing or `null` fields fall back to their zero values, so
/// `{"name":"Bob"}` is a valid body with an empty email and age 0.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Mutable fields of a user after validation.
///
/// Used for both inserts and full replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl UserPayload {
    /// Decode a raw request body.
    ///
    /// Any JSON error, including a non-object body, is a 400.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(|_| AppError::invalid_json())
    }

    /// Reject a name that is empty once surrounding whitespace is ignored.
    ///
    /// The name is stored exactly as sent.
    pub fn validate(self) -> Result<NewUser, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::name_required());
        }

        Ok(NewUser {
            name: self.name,
            email: self.email,
            age: self.age,
        })
    }
}

/// Parse a path segment into a user id.
///
/// Only positive integers are accepted.
pub fn parse_user_id(raw: &str) -> Result<i32, AppError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::invalid_id()),
    }
}
