//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{DomainError, DomainResult, PasswordHasher, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Construct, hash and persist a new user
    async fn register(&self, email: String, password: String) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Get user by exact email address
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Change email and/or password. Absent fields are left alone.
    async fn update_user(
        &self,
        id: Uuid,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User>;

    /// Permanently delete user
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;

    /// Check credentials; unknown email and wrong password look the same
    async fn authenticate(&self, email: &str, password: String) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<PasswordHasher>,
}

impl UserManager {
    /// Create new user service instance with repository and hasher
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { repo, hasher }
    }
}

/// Run CPU-heavy password work off the async workers.
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> DomainResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal(format!("Blocking task failed: {}", e)))?
        .map_err(AppError::from)
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, email: String, password: String) -> AppResult<User> {
        let hasher = Arc::clone(&self.hasher);
        let user = run_blocking(move || User::new(email, &password, &hasher)).await?;

        let user = self.repo.create(user)?;
        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        tracing::debug!(user_id = %id, "Fetching user");
        Ok(self.repo.get_by_id(id)?)
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        Ok(self.repo.get_by_email(email)?)
    }

    async fn update_user(
        &self,
        id: Uuid,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User> {
        let mut user = self.repo.get_by_id(id)?;
        if email.is_none() && password.is_none() {
            return Ok(user);
        }

        if let Some(email) = email {
            if email != user.email {
                user.change_email(email);
            }
        }

        if let Some(password) = password {
            let hasher = Arc::clone(&self.hasher);
            user = run_blocking(move || {
                user.change_password(&password, &hasher)?;
                Ok(user)
            })
            .await?;
        }

        let user = self.repo.update(user)?;
        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id)?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: String) -> AppResult<User> {
        let user = match self.repo.get_by_email(email) {
            Ok(user) => user,
            Err(DomainError::NotFound(_)) => {
                tracing::warn!("Authentication attempt for unknown email");
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        let candidate = user.clone();
        if let Err(e) = run_blocking(move || candidate.authenticate(&password)).await {
            if matches!(e, AppError::InvalidCredentials) {
                tracing::warn!(user_id = %user.id, "Authentication failed");
            }
            return Err(e);
        }

        Ok(user)
    }
}
