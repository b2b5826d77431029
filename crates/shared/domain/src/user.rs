//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::error::{DomainError, DomainResult};
use crate::password::{Password, PasswordHasher};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: Password,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Construct a new, unpersisted user.
    ///
    /// Assigns a fresh identifier, hashes the password and stamps both
    /// timestamps before validating the result.
    ///
    /// # Errors
    /// Propagates hasher failures and returns `Validation` for a missing
    /// or malformed email.
    pub fn new(email: String, plain_password: &str, hasher: &PasswordHasher) -> DomainResult<Self> {
        let password = hasher.hash(plain_password)?;
        let now = Utc::now();
        let user = Self {
            id: Uuid::new_v4(),
            email,
            password,
            created_at: now,
            updated_at: now,
        };
        user.validate()?;
        Ok(user)
    }

    /// Check entity-level constraints.
    pub fn validate(&self) -> DomainResult<()> {
        if self.email.is_empty() {
            return Err(DomainError::validation("Email is required"));
        }
        if !self.email.validate_email() {
            return Err(DomainError::validation("Invalid email format"));
        }
        if self.password.is_empty() {
            return Err(DomainError::validation("Password is required"));
        }
        if !self.password.is_phc() {
            return Err(DomainError::validation("Password secret is not a hash"));
        }
        Ok(())
    }

    /// Check a plaintext candidate against the stored secret.
    pub fn authenticate(&self, plain_password: &str) -> DomainResult<()> {
        if self.password.verify(plain_password) {
            Ok(())
        } else {
            Err(DomainError::InvalidCredentials)
        }
    }

    /// Update user's email
    pub fn change_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Re-hash and replace the password secret
    pub fn change_password(&mut self, plain_password: &str, hasher: &PasswordHasher) -> DomainResult<()> {
        self.password = hasher.hash(plain_password)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = "550e8400-e29b-41d4-a716-446655440000"))]
    pub id: Uuid,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "user@example.com"))]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
