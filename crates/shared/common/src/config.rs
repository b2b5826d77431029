//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Version reported by the health endpoint
    pub version: String,
    /// Deployment environment (development, test, production)
    pub environment: String,
}

impl ServiceConfig {
    /// Get the full bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            version: "1.0.0".to_string(),
            environment: "development".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = ServiceConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_flag() {
        let config = ServiceConfig {
            environment: "Production".to_string(),
            ..ServiceConfig::default()
        };
        assert!(config.is_production());
    }
}
