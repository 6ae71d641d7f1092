//! # recoup-allocator
//!
//! Sizes an incentive pool from total recovery and splits it across the
//! executive, manager, and head tiers.
//!
//! ```text
//! normalize → aggregate → eligibility gate → pool sizing
//!           → executive tier (team share × individual share)
//!           → manager tier (team share) → head tier → back to native units
//! ```

pub mod aggregate;
pub mod allocation;
pub mod distribution;
pub mod eligibility;
pub mod engine;
pub mod normalize;
pub mod pool;

pub use allocation::{allocate, allocate_with_breakdown, AllocationBreakdown};
pub use engine::AllocationEngine;
