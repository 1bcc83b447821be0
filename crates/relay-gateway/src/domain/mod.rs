//! Domain layer for the relay gateway.
//!
//! Contains configuration, error types, the shared secret wrapper and the
//! request/outcome/response types that flow through the render pipeline.

pub mod config;
pub mod error;
pub mod secret;
pub mod types;

pub use config::*;
pub use error::*;
pub use secret::SecretKey;
pub use types::*;
