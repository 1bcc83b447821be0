//! Relay Gateway - signed template rendering over HTTP.
//!
//! A caller holding the shared secret posts `{"template": ..., "data": ...}`
//! signed with HMAC-SHA256; the gateway renders the template in strict mode
//! and answers `{"rendered": ...}` or `{"error": ...}`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        RELAY GATEWAY                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   GET /  → 405 "needs to be post"     other → 404 "404"         │
//! │   POST / ─┐                                                     │
//! │           ▼                                                     │
//! │  ┌──────────────────┐  401 "wrong hmac"                         │
//! │  │  HmacAuthLayer   │──────────────────▶                        │
//! │  │  (Authenticator) │                                           │
//! │  └────────┬─────────┘                                           │
//! │           ▼ raw body bytes                                      │
//! │  ┌──────────────────┐                                           │
//! │  │  RenderPipeline  │  decode → extract → parse → render        │
//! │  │ (TemplateEngine) │                                           │
//! │  └────────┬─────────┘                                           │
//! │           ▼ RenderOutcome                                       │
//! │  ┌──────────────────┐                                           │
//! │  │  RenderResponse  │  {"rendered": ..} | {"error": ..}  (200)  │
//! │  └──────────────────┘                                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use relay_gateway::{GatewayConfig, RenderGatewayService, SecretKey};
//!
//! let service = RenderGatewayService::new(GatewayConfig::default(), SecretKey::new("s3cret"))?;
//! service.start(shutdown_signal()).await?;
//! ```
//!
//! # Security
//!
//! - The signature covers the exact request bytes, never a re-serialized form
//! - Signatures are compared in constant time
//! - Authentication happens before any parsing or rendering
//! - The secret is redacted from debug output and zeroized on drop

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod middleware;
pub mod pipeline;
pub mod ports;
pub mod security;
pub mod service;

// Re-exports for public API
pub use adapters::jinja::MiniJinjaEngine;
pub use domain::config::{GatewayConfig, HttpConfig, LimitsConfig};
pub use domain::error::{ConfigError, EngineError, GatewayError, RenderError};
pub use domain::secret::SecretKey;
pub use domain::types::{format_response, RenderOutcome, RenderRequest, RenderResponse};
pub use pipeline::RenderPipeline;
pub use ports::template::TemplateEngine;
pub use security::{Authenticator, SIGNATURE_HEADER};
pub use service::{build_router, RenderGatewayService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
