//! # Exploit Simulations
//!
//! Attempts to get a body rendered without knowing the shared secret.

pub mod signature_forgery;
