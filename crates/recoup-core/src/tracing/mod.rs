//! Structured logging setup and span helpers.

mod setup;
pub mod spans;

pub use setup::{fallback_directives, init_tracing};
