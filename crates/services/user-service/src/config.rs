//! User service configuration.

use std::env;

use common::ServiceConfig;
use domain::{HashCost, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM};

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Bind address, version and environment
    pub service: ServiceConfig,
    /// Argon2 memory cost in KiB
    pub hash_memory_kib: u32,
    /// Argon2 iteration count
    pub hash_iterations: u32,
    /// Argon2 parallelism
    pub hash_parallelism: u32,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                host: env::var("USER_SERVICE_HOST").unwrap_or(defaults.host),
                port: env::var("USER_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
                version: env::var("APP_VERSION").unwrap_or(defaults.version),
                environment: env::var("APP_ENV").unwrap_or(defaults.environment),
            },
            hash_memory_kib: env::var("PASSWORD_HASH_MEMORY_KIB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HASH_MEMORY_KIB),
            hash_iterations: env::var("PASSWORD_HASH_ITERATIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HASH_ITERATIONS),
            hash_parallelism: env::var("PASSWORD_HASH_PARALLELISM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HASH_PARALLELISM),
        }
    }

    /// Password hashing cost derived from the configured values.
    pub fn hash_cost(&self) -> HashCost {
        HashCost::new(
            self.hash_memory_kib,
            self.hash_iterations,
            self.hash_parallelism,
        )
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                ..ServiceConfig::default()
            },
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}
