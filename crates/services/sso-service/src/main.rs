//! SSO Service - gRPC server for authentication.

use clap::{Parser, Subcommand};

use sso_service_lib::config::{MigrateConfig, SsoConfig};
use sso_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "sso-service")]
#[command(about = "Single-sign-on authentication service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gRPC server
    Serve {
        /// Overrides GRPC_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides GRPC_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Configuration errors are fatal at start-up
    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = SsoConfig::from_env()?;
            common::telemetry::init_tracing(config.env);

            if let Some(host) = host {
                config.grpc.host = host;
            }
            if let Some(port) = port {
                config.grpc.port = port;
            }
            sso_service_lib::run_server(config).await?;
        }
        Commands::Migrate { action } => {
            let config = MigrateConfig::from_env()?;
            common::telemetry::init_tracing(config.env);

            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            sso_service_lib::run_migrations(&config.database, migrate_action).await?;
        }
    }

    Ok(())
}
