//! User service - orchestration between handlers and storage.
//!
//! Every method forwards to the repository unchanged: same arguments, same
//! results, same error kinds. Cross-field validation or multi-step workflows
//! belong here rather than in the handlers.

use std::sync::Arc;

use crate::{
    error::AppError,
    models::user::{NewUser, User},
    repository::UserRepository,
};

/// Use-case entry point for user CRUD.
///
/// Cheap to clone; the repository is shared behind an `Arc`.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// List every user, ordered by id.
    pub async fn get_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.get_users().await
    }

    /// # Errors
    ///
    /// - `UserNotFound`: no user has this id
    /// - `Internal`: storage failed
    pub async fn get_user_by_id(&self, id: i32) -> Result<User, AppError> {
        self.repository.get_user_by_id(id).await
    }

    /// Create a user and return its new id.
    pub async fn create_user(&self, user: NewUser) -> Result<i32, AppError> {
        let id = self.repository.create_user(user).await?;
        tracing::debug!(user_id = id, "user created");
        Ok(id)
    }

    /// # Errors
    ///
    /// - `UserNotFound`: no user has this id
    /// - `Internal`: storage failed
    pub async fn update_user(&self, id: i32, user: NewUser) -> Result<(), AppError> {
        self.repository.update_user(id, user).await
    }

    /// Delete a user, returning the affected row count.
    ///
    /// # Errors
    ///
    /// - `UserNotFound`: no user has this id
    /// - `Internal`: storage failed
    pub async fn delete_user_by_id(&self, id: i32) -> Result<u64, AppError> {
        self.repository.delete_user_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn alice() -> NewUser {
        NewUser {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            age: 20,
        }
    }

    #[tokio::test]
    async fn forwards_create_to_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .with(eq(alice()))
            .times(1)
            .returning(|_| Ok(7));

        let service = UserService::new(Arc::new(repo));

        assert_eq!(service.create_user(alice()).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn passes_not_found_through_unchanged() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_user()
            .with(eq(3), eq(alice()))
            .returning(|_, _| Err(AppError::UserNotFound));
        repo.expect_delete_user_by_id()
            .with(eq(3))
            .returning(|_| Err(AppError::UserNotFound));

        let service = UserService::new(Arc::new(repo));

        assert!(matches!(
            service.update_user(3, alice()).await,
            Err(AppError::UserNotFound)
        ));
        assert!(matches!(
            service.delete_user_by_id(3).await,
            Err(AppError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn passes_storage_failures_through_as_internal() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_users()
            .returning(|| Err(AppError::from(sqlx::Error::PoolTimedOut)));

        let service = UserService::new(Arc::new(repo));

        assert!(matches!(
            service.get_users().await,
            Err(AppError::Internal(_))
        ));
    }
}
