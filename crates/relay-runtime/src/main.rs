//! # Render Relay
//!
//! Serves the HMAC-authenticated render endpoint. All configuration comes
//! from the environment; see [`relay_runtime::RuntimeConfig::from_env`].

use anyhow::{Context, Result};
use relay_gateway::RenderGatewayService;
use relay_runtime::{init_logging, RuntimeConfig};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = RuntimeConfig::from_env().context("failed to load configuration")?;

    // Initialize logging
    init_logging(&config.telemetry).context("failed to initialize logging")?;

    let effective = serde_json::to_string(&config.gateway)
        .context("failed to serialize gateway configuration")?;
    info!(
        version = relay_gateway::VERSION,
        config = %effective,
        "Render relay starting"
    );

    let service = RenderGatewayService::new(config.gateway, config.secret)
        .context("failed to create relay gateway")?;

    service
        .start(shutdown_signal())
        .await
        .context("relay gateway terminated with an error")?;

    info!("Render relay stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
