/// Native currency units in one lakh.
pub const NATIVE_PER_LAKH: f64 = 100_000.0;

/// Share of total recovery set aside as the incentive pool.
pub const POOL_RATE: f64 = 0.20;

/// Tier shares of the pool. These sum to exactly 1.0.
pub const EXECUTIVE_TIER_SHARE: f64 = 0.60;
pub const MANAGER_TIER_SHARE: f64 = 0.25;
pub const HEAD_TIER_SHARE: f64 = 0.15;

/// Team shape bounds accepted by the input collector.
pub const MIN_MANAGERS: u32 = 1;
pub const MAX_MANAGERS: u32 = 10;
pub const MIN_EXECUTIVES_PER_MANAGER: u32 = 1;
pub const MAX_EXECUTIVES_PER_MANAGER: u32 = 15;

/// Relative tolerance used when reconciling pool totals.
pub const RECONCILE_TOLERANCE: f64 = 1e-6;
