//! PostgreSQL implementation of [`UserRepository`].

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::AppError,
    models::user::{NewUser, User},
};

use super::{UserRepository, with_timeout};

/// User repository backed by a shared `sqlx` pool.
///
/// Each query runs on its own task under `exec_timeout`, measured from the
/// start of that call. The pool handle is cloned into the task.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: DbPool,
    exec_timeout: Duration,
}

impl PgUserRepository {
    pub fn new(pool: DbPool, exec_timeout: Duration) -> Self {
        Self { pool, exec_timeout }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_users(&self) -> Result<Vec<User>, AppError> {
        let pool = self.pool.clone();
        with_timeout(self.exec_timeout, async move {
            let users = sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, age, created_at
                FROM users
                ORDER BY id
                "#,
            )
            .fetch_all(&pool)
            .await?;

            Ok(users)
        })
        .await
    }

    async fn get_user_by_id(&self, id: i32) -> Result<User, AppError> {
        let pool = self.pool.clone();
        with_timeout(self.exec_timeout, async move {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, age, created_at
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&pool)
            .await?
            .ok_or(AppError::UserNotFound)
        })
        .await
    }

    async fn create_user(&self, user: NewUser) -> Result<i32, AppError> {
        let pool = self.pool.clone();
        with_timeout(self.exec_timeout, async move {
            let id = sqlx::query_scalar::<_, i32>(
                r#"
                INSERT INTO users (name, email, age)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(user.name)
            .bind(user.email)
            .bind(user.age)
            .fetch_one(&pool)
            .await?;

            Ok(id)
        })
        .await
    }

    async fn update_user(&self, id: i32, user: NewUser) -> Result<(), AppError> {
        let pool = self.pool.clone();
        with_timeout(self.exec_timeout, async move {
            let updated_count = sqlx::query(
                r#"
                UPDATE users
                SET name = $1, email = $2, age = $3
                WHERE id = $4
                "#,
            )
            .bind(user.name)
            .bind(user.email)
            .bind(user.age)
            .bind(id)
            .execute(&pool)
            .await?
            .rows_affected();

            if updated_count == 0 {
                return Err(AppError::UserNotFound);
            }

            Ok(())
        })
        .await
    }

    async fn delete_user_by_id(&self, id: i32) -> Result<u64, AppError> {
        let pool = self.pool.clone();
        with_timeout(self.exec_timeout, async move {
            let deleted_count = sqlx::query("DELETE FROM users WHERE id = $1")
                .bind(id)
                .execute(&pool)
                .await?
                .rows_affected();

            if deleted_count == 0 {
                return Err(AppError::UserNotFound);
            }

            Ok(deleted_count)
        })
        .await
    }
}
