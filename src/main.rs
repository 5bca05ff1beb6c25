//! surfcast - rated, time-bucketed surf forecasts over HTTP
//!
//! This is the main entry point for the surfcast application.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use surfcast::beach_loader::load_beaches;
use surfcast::handlers::{heartbeat, router};
use surfcast::{init_tracing, log_error, AppState, Config, Result, SurfcastError};

#[tokio::main]
async fn main() -> Result<()> {
    heartbeat::mark_started();

    // Load configuration before tracing so the configured level applies
    let (config, beaches_path) = match Config::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(e);
        }
    };

    init_tracing(&config.log_level);
    info!("Starting surfcast v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    if config.stormglass.api_token.is_empty() {
        warn!("No StormGlass API token configured, provider requests will be rejected");
    }

    info!("Loading beaches: {:?}", beaches_path);

    let beaches = load_beaches(&beaches_path).map_err(|e| {
        log_error(&e, "beach_load");
        e
    })?;

    let app_state = AppState::with_stormglass(config.clone(), beaches)?;

    app_state.validate().map_err(|e| {
        error!("Invalid application state: {}", e);
        e
    })?;

    info!(
        beaches = app_state.beaches.len(),
        fetch_mode = ?app_state.forecast.fetch_mode(),
        "Forecast service ready"
    );

    let app = router(Arc::new(app_state));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| SurfcastError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SurfcastError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SurfcastError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
