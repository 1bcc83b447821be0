//! Adapters implementing the gateway's ports.

pub mod jinja;

pub use jinja::MiniJinjaEngine;
