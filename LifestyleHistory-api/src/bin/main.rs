use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use lifestyle_history_api::api::{create_app_with_services, AppServices};
use lifestyle_history_api::config::ServerConfig;
use lifestyle_history_data::database::{create_database_pool, get_connection_info, DatabaseConfig};

/// The main entry point for the lifestyle and medical history API server
///
/// This function:
/// 1. Initializes environment variables from .env file
/// 2. Sets up tracing for logging
/// 3. Initializes the database connection pool
/// 4. Creates and starts the Axum web application
/// 5. Handles graceful shutdown
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .with_ansi(true)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stdout))
        .with(env_filter)
        .init();

    info!("Starting lifestyle and medical history API server");

    let server_config = ServerConfig::from_env().context("invalid server configuration")?;
    let db_config = DatabaseConfig::from_env().context("invalid database configuration")?;

    let services = match create_database_pool(&db_config) {
        Ok(pool) => {
            info!("Using {}", get_connection_info(&pool));
            AppServices::from_pool(pool)
        }
        Err(e) => {
            // Keep serving; /health reports the database as degraded
            error!("Failed to initialize database pool: {}", e);
            warn!("Falling back to in-memory storage, records will not survive a restart");
            AppServices::in_memory()
        }
    };

    // Create the Axum application with all routes and middleware
    let app = create_app_with_services(services);

    let listener = TcpListener::bind((server_config.host.as_str(), server_config.port))
        .await
        .with_context(|| format!("failed to bind {}", server_config.address()))?;
    info!("Listening on {}", server_config.address());

    // Serve the application with graceful shutdown support
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for CTRL+C or SIGTERM (on Unix systems)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}
