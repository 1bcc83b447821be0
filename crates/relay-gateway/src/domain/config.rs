//! Gateway configuration with validation.
//!
//! The shared secret is deliberately absent: it travels separately as a
//! [`SecretKey`](crate::domain::secret::SecretKey) so this struct can be
//! serialized into startup logs.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default port (the port the endpoint has always listened on)
pub const DEFAULT_PORT: u16 = 4567;

/// Default request body limit (2 MiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Main gateway configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Request limits
    pub limits: LimitsConfig,
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort("port cannot be 0".into()));
        }

        if self.limits.max_body_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_body_size cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 4567)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Request limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}
