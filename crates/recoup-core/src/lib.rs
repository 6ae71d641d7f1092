//! # recoup-core
//!
//! Foundation crate for the Recoup incentive system.
//! Defines identifiers, money units, config, errors, traits, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::RecoupConfig;
pub use errors::{RecoupError, RecoupResult};
pub use models::{
    AllocationRequest, AllocationResult, ExecutiveId, IncentiveSettings, Lakhs, ManagerId,
    TeamShape, UnitMode,
};
