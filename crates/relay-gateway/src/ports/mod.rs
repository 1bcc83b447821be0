//! Ports (hexagonal architecture).
//!
//! Capabilities the gateway consumes but does not implement itself.

pub mod template;

pub use template::TemplateEngine;
