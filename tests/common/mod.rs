#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;
use user_service::{
    AppError,
    middleware::auth::ApiKey,
    models::user::{NewUser, User},
    repository::UserRepository,
    routes::build_router,
    services::UserService,
};

pub const API_KEY: &str = "integration-key";

/// `UserRepository` kept in memory, assigning ids from 1 like a SERIAL column.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_id: i32,
    users: Vec<User>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_users(&self) -> Result<Vec<User>, AppError> {
        let state = self.state.lock().unwrap();
        let mut users = state.users.clone();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn get_user_by_id(&self, id: i32) -> Result<User, AppError> {
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(AppError::UserNotFound)
    }

    async fn create_user(&self, user: NewUser) -> Result<i32, AppError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.users.push(User {
            id,
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update_user(&self, id: i32, user: NewUser) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        let existing = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::UserNotFound)?;
        existing.name = user.name;
        existing.email = user.email;
        existing.age = user.age;
        Ok(())
    }

    async fn delete_user_by_id(&self, id: i32) -> Result<u64, AppError> {
        let mut state = self.state.lock().unwrap();
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        match before - state.users.len() {
            0 => Err(AppError::UserNotFound),
            n => Ok(n as u64),
        }
    }
}

pub fn test_app() -> Router {
    let repository = Arc::new(InMemoryUserRepository::default());
    build_router(UserService::new(repository), ApiKey::new(API_KEY))
}

pub async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    key: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = key {
        builder = builder.header("X-API-KEY", key);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn authed(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    call(app, method, uri, Some(API_KEY), body).await
}
