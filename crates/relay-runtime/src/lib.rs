//! # Render Relay Runtime
//!
//! Process wiring for the relay gateway:
//!
//! - `config` - environment-driven startup configuration
//! - `telemetry` - `tracing-subscriber` installation (human or JSON output)
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment (`SECRET` is mandatory)
//! 2. Install logging
//! 3. Log the effective gateway configuration (never the secret)
//! 4. Bind and serve until Ctrl-C / SIGTERM

pub mod config;
pub mod telemetry;

pub use config::RuntimeConfig;
pub use telemetry::{init_logging, TelemetryConfig, TelemetryError};
