//! User management HTTP handlers.
//!
//! This module implements the user endpoints:
//! - GET /users - List all users
//! - POST /users - Create a user
//! - GET /users/{id} - Get user by ID
//! - PUT|PATCH /users/{id} - Replace name, email and age
//! - DELETE /users/{id} - Delete user
//!
//! Bodies are taken as raw bytes and decoded here, so a bad body is always a
//! 400 with a JSON error regardless of `Content-Type`. Path ids are parsed
//! before the method or the body is looked at.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    error::AppError,
    models::user::{User, UserPayload, parse_user_id},
    services::UserService,
};

use super::StatusResponse;

/// Response body for a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
}

/// List all users.
///
/// # Response
///
/// - **Success (200 OK)**: array of users ordered by id, `[]` when empty
/// - **Error (500)**: storage failure
pub async fn list_users(State(service): State<UserService>) -> Result<Json<Vec<User>>, AppError> {
    let users = service.get_users().await?;
    Ok(Json(users))
}

/// Create a new user.
///
/// # Request Body
///
/// ```json
/// { "name": "Alice", "email": "a@x.com", "age": 20 }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"id": 1}`
/// - **Error (400)**: body is not valid JSON, or name is blank
/// - **Error (500)**: storage failure
pub async fn create_user(
    State(service): State<UserService>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let user = UserPayload::from_json(&body)?.validate()?;
    let id = service.create_user(user).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Dispatch a request on `/users/{id}`.
///
/// The id is parsed before the method is looked at, so any suffix that is not
/// a positive integer (`/users/abc`, `/users/1/extra`) is a 400 whatever the
/// method.
///
/// - `GET`: [`get_user`]
/// - `PUT` / `PATCH`: [`update_user`]
/// - `DELETE`: [`delete_user`]
/// - anything else: 405
pub async fn user_by_id(
    State(service): State<UserService>,
    method: Method,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let id = parse_user_id(&raw_id)?;

    match method {
        Method::GET => Ok(get_user(&service, id).await?.into_response()),
        Method::PUT | Method::PATCH => {
            Ok(update_user(&service, id, &body).await?.into_response())
        }
        Method::DELETE => Ok(delete_user(&service, id).await?.into_response()),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// `/users/` with nothing after the slash.
pub async fn missing_user_id() -> AppError {
    AppError::invalid_id()
}

/// Get a specific user by ID.
///
/// # Response
///
/// - **Success (200 OK)**: the user
/// - **Error (404)**: no such user
async fn get_user(service: &UserService, id: i32) -> Result<Json<User>, AppError> {
    let user = service.get_user_by_id(id).await?;
    Ok(Json(user))
}

/// Replace a user's name, email and age.
///
/// Served for both `PUT` and `PATCH`; either way every mutable field is
/// overwritten. Same body and validation as [`create_user`].
///
/// # Response
///
/// - **Success (200 OK)**: `{"status": "updated"}`
/// - **Error (400)**: bad JSON, or blank name
/// - **Error (404)**: no such user
async fn update_user(
    service: &UserService,
    id: i32,
    body: &[u8],
) -> Result<Json<StatusResponse>, AppError> {
    let user = UserPayload::from_json(body)?.validate()?;

    service.update_user(id, user).await?;

    Ok(Json(StatusResponse::new("updated")))
}

/// Delete a user.
///
/// # Response
///
/// - **Success (200 OK)**: `{"status": "deleted"}`
/// - **Error (404)**: no such user, including one deleted earlier
async fn delete_user(service: &UserService, id: i32) -> Result<Json<StatusResponse>, AppError> {
    service.delete_user_by_id(id).await?;

    Ok(Json(StatusResponse::new("deleted")))
}
