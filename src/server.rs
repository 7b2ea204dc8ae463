//! Server startup and shutdown.
//!
//! `run_server` resolves the origin list once, builds the router, binds the
//! listener and serves until a shutdown signal arrives.

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// Run the web server with the given configuration.
///
/// # Errors
///
/// Returns `AppError::Internal` if binding the address fails or the server
/// stops with a runtime error.
pub async fn run_server(config: Config) -> AppResult<()> {
    info!("Starting server...");

    let database_mode = config.settings.database_mode();
    if database_mode.is_enabled() {
        info!(database = %database_mode, "Database mode resolved");
    } else {
        warn!("DATABASE_URL not set, running without a database");
    }
    debug!(debug = config.settings.debug, "Debug mode");

    let allowed_origins = config.settings.cors_origin_list();
    info!(origins = ?allowed_origins, "CORS origins configured");

    let app = routes::create_router(&allowed_origins);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
///
/// # Panics
///
/// Panics if a signal handler cannot be installed; graceful shutdown is
/// impossible without one.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;

    info!("Shutdown signal received");
}
