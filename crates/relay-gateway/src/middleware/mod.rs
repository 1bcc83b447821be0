//! Middleware stack for the relay gateway.
//!
//! Layer order: Request → Tracing → (POST /) HmacAuth → Handler

pub mod auth;
pub mod tracing;

pub use self::auth::{HmacAuthLayer, PAYLOAD_TOO_LARGE_BODY, UNAUTHORIZED_BODY};
pub use self::tracing::TracingLayer;
