//! Application state for dependency injection.

use std::sync::Arc;

use common::ServiceConfig;
use domain::PasswordHasher;

use crate::repository::MemoryUserStore;
use crate::service::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub config: ServiceConfig,
}

impl AppState {
    /// Create new app state with manually injected services.
    pub fn new(user_service: Arc<dyn UserService>, config: ServiceConfig) -> Self {
        Self {
            user_service,
            config,
        }
    }

    /// Wire a `UserManager` over a fresh in-memory store.
    pub fn in_memory(hasher: PasswordHasher, config: ServiceConfig) -> Self {
        let repo = Arc::new(MemoryUserStore::new());
        let user_service = Arc::new(UserManager::new(repo, Arc::new(hasher)));
        Self::new(user_service, config)
    }
}
