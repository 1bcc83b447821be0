//! Logging setup.
//!
//! Installs a global `tracing` subscriber: an `EnvFilter` built from the
//! configured level plus either a human-readable or a JSON `fmt` layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Log filter directive (trace, debug, info, warn, error, or `target=level` lists)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }
}

/// Logging setup errors
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Parse a log filter directive.
pub fn build_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(log_level).map_err(|e| TelemetryError::Filter {
        filter: log_level.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(&config.log_level)?;

    if config.json_logs {
        // JSON output for containers/production
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        // Pretty output for development
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    tracing::debug!(
        log_level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}
