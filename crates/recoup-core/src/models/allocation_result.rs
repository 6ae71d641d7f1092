use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ExecutiveId, ManagerId};
use crate::constants::RECONCILE_TOLERANCE;

/// Pool size per tier, native units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierTotals {
    pub executive: f64,
    pub manager: f64,
    pub head: f64,
}

impl TierTotals {
    pub fn sum(&self) -> f64 {
        self.executive + self.manager + self.head
    }
}

/// Outcome of one allocation call. Every monetary field is in native units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub eligible: bool,
    pub total_recovery: f64,
    /// Percentage of the monthly target reached; 0 when the target is 0.
    pub target_achievement: f64,
    /// Recovery per executive after normalization.
    pub executive_recoveries: BTreeMap<ExecutiveId, f64>,
    /// Summed recovery per manager's team.
    pub team_recoveries: BTreeMap<ManagerId, f64>,
    /// Empty when ineligible.
    pub executive_incentives: BTreeMap<ExecutiveId, f64>,
    /// Empty when ineligible.
    pub manager_incentives: BTreeMap<ManagerId, f64>,
    pub head_incentive: f64,
    pub tier_totals: TierTotals,
    pub total_pool: f64,
    /// Why nothing is payable. Set only when ineligible.
    pub reason: Option<String>,
}

impl AllocationResult {
    /// Sum of every incentive actually handed out.
    pub fn distributed_total(&self) -> f64 {
        self.executive_incentives.values().sum::<f64>()
            + self.manager_incentives.values().sum::<f64>()
            + self.head_incentive
    }

    /// Sum of one manager's team executive incentives.
    pub fn team_executive_incentives(&self, manager: ManagerId) -> f64 {
        self.executive_incentives
            .iter()
            .filter(|(id, _)| id.manager_id() == manager)
            .map(|(_, v)| v)
            .sum()
    }

    /// Whether the tier totals and distributed incentives reconcile to the pool.
    pub fn is_reconciled(&self) -> bool {
        let tolerance = RECONCILE_TOLERANCE * self.total_pool.abs().max(1.0);
        (self.tier_totals.sum() - self.total_pool).abs() <= tolerance
            && (self.distributed_total() - self.total_pool).abs() <= tolerance
    }
}
