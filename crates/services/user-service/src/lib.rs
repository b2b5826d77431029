//! User Service Library
//!
//! This crate provides user management over HTTP: an in-memory user
//! repository, the user service on top of it, and the Axum router that
//! exposes both.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use domain::{HashCost, PasswordHasher};

use crate::config::UserServiceConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the service on the given address, everything else from the environment.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = UserServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    run_server(config).await
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let hash_cost = config.hash_cost();
    if config.service.is_production() && hash_cost != HashCost::default() {
        warn!(?hash_cost, "Non-default password hash cost in production");
    }
    let hasher = PasswordHasher::new(hash_cost)?;

    let state = AppState::in_memory(hasher, config.service.clone());
    let app = create_router(state);

    let addr: SocketAddr = config.service.addr().parse()?;
    info!(
        service = %config.service.service_name,
        version = %config.service.version,
        environment = %config.service.environment,
        "User service listening on {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("User service stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
