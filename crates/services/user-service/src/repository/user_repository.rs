//! User repository: trait plus the in-memory store.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use domain::{DomainError, DomainResult, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Operations are synchronous and never perform I/O while holding a lock.
/// Any store offering this capability set can stand in for the in-memory one.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `Conflict` if the email is taken.
    fn create(&self, user: User) -> DomainResult<User>;

    /// Find user by ID
    fn get_by_id(&self, id: Uuid) -> DomainResult<User>;

    /// Find user by exact email address
    fn get_by_email(&self, email: &str) -> DomainResult<User>;

    /// Replace an existing user, keeping the email index in step.
    ///
    /// The stored `created_at` always wins and `updated_at` is stamped here.
    fn update(&self, user: User) -> DomainResult<User>;

    /// Remove a user and its email index entry
    fn delete(&self, id: Uuid) -> DomainResult<()>;
}

/// Primary store plus email index. Only ever touched under `MemoryUserStore::tables`.
#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    email_index: HashMap<String, Uuid>,
}

/// In-memory implementation of `UserRepository`.
///
/// Both maps live behind one `RwLock`, so readers always observe the
/// primary store and the email index in agreement.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    tables: RwLock<Tables>,
}

impl MemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.users.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| DomainError::internal("User store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| DomainError::internal("User store lock poisoned"))
    }
}

impl UserRepository for MemoryUserStore {
    fn create(&self, user: User) -> DomainResult<User> {
        user.validate()?;

        let mut tables = self.write()?;
        if tables.email_index.contains_key(&user.email) {
            tracing::warn!(email = %user.email, "Rejected duplicate email");
            return Err(DomainError::conflict("Email"));
        }
        if tables.users.contains_key(&user.id) {
            return Err(DomainError::conflict("User"));
        }

        tables.email_index.insert(user.email.clone(), user.id);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn get_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.read()?
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("User"))
    }

    fn get_by_email(&self, email: &str) -> DomainResult<User> {
        let tables = self.read()?;
        tables
            .email_index
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned()
            .ok_or_else(|| DomainError::not_found("User"))
    }

    fn update(&self, mut user: User) -> DomainResult<User> {
        user.validate()?;

        let mut tables = self.write()?;
        let (previous_email, created_at) = match tables.users.get(&user.id) {
            Some(existing) => (existing.email.clone(), existing.created_at),
            None => return Err(DomainError::not_found("User")),
        };

        if previous_email != user.email {
            // Another account owns the target address: leave everything untouched
            if let Some(owner) = tables.email_index.get(&user.email) {
                if *owner != user.id {
                    tracing::warn!(user_id = %user.id, email = %user.email, "Rejected email change to taken address");
                    return Err(DomainError::conflict("Email"));
                }
            }
            tables.email_index.remove(&previous_email);
            tables.email_index.insert(user.email.clone(), user.id);
        }

        user.created_at = created_at;
        user.updated_at = Utc::now().max(created_at);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut tables = self.write()?;
        let user = tables
            .users
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("User"))?;
        tables.email_index.remove(&user.email);
        Ok(())
    }
}
