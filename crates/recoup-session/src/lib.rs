//! # recoup-session
//!
//! Everything that sits between a person entering figures and the allocator:
//! the mutable [`SessionContext`], the input [`collector`] that validates raw
//! values, and the [`sample`] data generator used for demonstrations.

pub mod collector;
pub mod context;
pub mod sample;

pub use context::SessionContext;
pub use sample::{SampleGenerator, SampleProfile};
