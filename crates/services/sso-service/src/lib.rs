//! SSO Service Library
//!
//! Identity core of the single-sign-on service: account registration,
//! login with per-application tokens and admin checks, served over gRPC.

pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;
pub mod token;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tonic::transport::Server;
use tracing::info;

use crate::config::SsoConfig;
use crate::grpc::AuthGrpcService;
use crate::infra::Database;
use crate::repository::CredentialStore;
use crate::service::Authenticator;
use crate::token::TokenIssuer;
use common::DatabaseConfig;
use domain::{Argon2Hasher, PasswordHasher};

/// Wire a credential store into an authenticator.
///
/// The store serves as saver, account provider and application provider.
pub fn build_authenticator(
    store: CredentialStore,
    hasher: Arc<dyn PasswordHasher>,
    token_ttl: Duration,
) -> Authenticator {
    let store = Arc::new(store);
    Authenticator::new(
        store.clone(),
        store.clone(),
        store,
        hasher,
        TokenIssuer::default(),
        token_ttl,
    )
}

/// Run the gRPC server until SIGINT or SIGTERM.
pub async fn run_server(config: SsoConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;
    db.ping().await?;

    // Create store and service
    let hasher = Arc::new(Argon2Hasher::new(config.hash_cost)?);
    let auth_service = Arc::new(build_authenticator(
        CredentialStore::new(db.get_connection()),
        hasher,
        config.token_ttl,
    ));

    // Create gRPC service
    let grpc_service = AuthGrpcService::new(auth_service);

    // Build address
    let addr: SocketAddr = config.grpc.addr().parse()?;
    info!(env = %config.env, "SSO service listening on {}", addr);

    // Run server
    Server::builder()
        .timeout(config.grpc.timeout())
        .add_service(proto::AuthServer::new(grpc_service))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &DatabaseConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
