//! Pinch - A state-managed HTTP server for kitchen timers and cooking math
//!
//! This is the main entry point for the pinch application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use pinch::{
    api::create_router,
    audio::{create_alert_channel, AlertService},
    config::Config,
    state::AppState,
    tasks::tick_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pinch={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pinch server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, muted={}",
        config.host, config.port, config.muted
    );

    // Start the audio alert service
    let (alert_tx, alert_rx) = create_alert_channel();
    tokio::spawn(AlertService::new(alert_rx, config.muted).run());

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), alert_tx));

    // Start the one-second tick driver; the shutdown channel guarantees the
    // repeating task is cancelled before the process exits
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let tick_handle = tokio::spawn(tick_task(Arc::clone(&state), shutdown_rx));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST   /timers            - Add a timer");
    info!("  GET    /timers            - List timers");
    info!("  POST   /timers/:id/toggle - Pause or resume a timer");
    info!("  DELETE /timers/:id        - Remove a timer");
    info!("  GET    /convert/...       - Unit conversion (volume, weight, temp)");
    info!("  POST   /scale             - Scale recipe lines");
    info!("  GET    /reference         - Measurement reference");
    info!("  GET    /substitutions     - Ingredient substitutions");
    info!("  GET    /status            - Current status");
    info!("  GET    /health            - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Stop the tick driver deterministically
    let _ = shutdown_tx.send(true);
    let _ = tick_handle.await;

    info!("Server shutdown complete");
    Ok(())
}
