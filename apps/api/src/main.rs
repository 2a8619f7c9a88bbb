//! # Teller API Server
//!
//! Process bootstrap: tracing, configuration, listener, graceful shutdown.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Teller API Server                           │
//! │                                                                     │
//! │  Client ───► HTTP (3000) ───► Router ───► teller-core              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use teller_api::config::ApiConfig;
use teller_api::handlers::AppState;
use teller_api::router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Teller API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(port = config.port, "Configuration loaded");

    // Create shared state over the production denomination set
    let state = Arc::new(AppState::standard());
    info!(
        denominations = %state.engine.denominations(),
        "Breakdown engine ready"
    );

    // Build the router
    let app = router(state);

    // Bind the listener
    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "API server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
