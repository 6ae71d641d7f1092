//! Per-tier distribution of the pool.

pub mod executive;
pub mod manager;

use std::collections::BTreeMap;

use recoup_core::models::{ExecutiveId, Lakhs, ManagerId};

use crate::aggregate::TeamTotals;
use crate::pool::PoolSplit;

/// Incentives for every beneficiary, internal unit.
#[derive(Debug, Clone)]
pub struct Distribution {
    pub executives: BTreeMap<ExecutiveId, Lakhs>,
    pub managers: BTreeMap<ManagerId, Lakhs>,
    /// The head is the single beneficiary of the head tier.
    pub head: Lakhs,
}

/// Distribute all three tiers of `pool`.
pub fn distribute(pool: &PoolSplit, totals: &TeamTotals) -> Distribution {
    Distribution {
        executives: executive::distribute(pool.executive, totals),
        managers: manager::distribute(pool.manager, totals),
        head: pool.head,
    }
}
