use recoup_core::constants::{EXECUTIVE_TIER_SHARE, HEAD_TIER_SHARE, MANAGER_TIER_SHARE, POOL_RATE};
use recoup_core::models::Lakhs;

/// The incentive pool and its three tier slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolSplit {
    pub total: Lakhs,
    pub executive: Lakhs,
    pub manager: Lakhs,
    pub head: Lakhs,
}

/// Size the pool as 20% of total recovery and split it 60 / 25 / 15.
pub fn size(total_recovery: Lakhs) -> PoolSplit {
    let total = total_recovery * POOL_RATE;
    PoolSplit {
        total,
        executive: total * EXECUTIVE_TIER_SHARE,
        manager: total * MANAGER_TIER_SHARE,
        head: total * HEAD_TIER_SHARE,
    }
}
