//! Runtime configuration from environment variables.

use crate::telemetry::{TelemetryConfig, DEFAULT_LOG_LEVEL};
use relay_gateway::{ConfigError, GatewayConfig, SecretKey};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Gateway settings (safe to log)
    pub gateway: GatewayConfig,

    /// Shared HMAC secret (never logged)
    pub secret: SecretKey,

    /// Logging settings
    pub telemetry: TelemetryConfig,
}

impl RuntimeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SECRET`: Shared HMAC secret (required, non-empty)
    /// - `RELAY_HOST`: Bind address (default: 0.0.0.0)
    /// - `RELAY_PORT` or `PORT`: Bind port (default: 4567)
    /// - `RELAY_MAX_BODY_BYTES`: Request body limit (default: 2097152)
    /// - `RELAY_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `RELAY_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("SECRET") {
            Some(value) if !value.is_empty() => SecretKey::new(value),
            _ => return Err(ConfigError::MissingSecret),
        };

        let mut gateway = GatewayConfig::default();

        if let Some(host) = parse_var(&lookup, "RELAY_HOST")? {
            gateway.http.host = host;
        }

        let port = match parse_var(&lookup, "RELAY_PORT")? {
            Some(port) => Some(port),
            None => parse_var(&lookup, "PORT")?,
        };
        if let Some(port) = port {
            gateway.http.port = port;
        }

        if let Some(max) = parse_var(&lookup, "RELAY_MAX_BODY_BYTES")? {
            gateway.limits.max_body_size = max;
        }

        gateway.validate()?;

        let log_level = lookup("RELAY_LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let json_logs = match lookup("RELAY_JSON_LOGS") {
            Some(value) => parse_bool("RELAY_JSON_LOGS", &value)?,
            None => false,
        };

        Ok(Self {
            gateway,
            secret,
            telemetry: TelemetryConfig {
                log_level,
                json_logs,
            },
        })
    }
}

/// Parse an optional variable, naming it in the error.
fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| invalid(name, e.to_string())),
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(invalid(name, format!("expected a boolean, got '{}'", other))),
    }
}

fn invalid(name: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnv {
        name: name.to_string(),
        reason,
    }
}
