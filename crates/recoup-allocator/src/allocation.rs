use std::collections::BTreeMap;

use recoup_core::models::{AllocationRequest, AllocationResult, Lakhs, ManagerId, TierTotals};

use crate::aggregate::{self, TeamTotals};
use crate::distribution::{self, Distribution};
use crate::eligibility::{self, EligibilityDecision};
use crate::normalize::{self, map_to_native, to_native};
use crate::pool::{self, PoolSplit};

/// Compute the incentive distribution for one request.
///
/// Pure: reads only `request`, allocates fresh output, never fails.
pub fn allocate(request: &AllocationRequest) -> AllocationResult {
    allocate_with_breakdown(request).result
}

/// Intermediate values in the internal unit, for debugging and audit output.
#[derive(Debug, Clone)]
pub struct AllocationBreakdown {
    pub totals: TeamTotals,
    pub monthly_target: Lakhs,
    pub eligibility: EligibilityDecision,
    /// `None` when ineligible.
    pub pool: Option<PoolSplit>,
    /// `None` when ineligible.
    pub distribution: Option<Distribution>,
    pub result: AllocationResult,
}

/// Compute the allocation along with every intermediate step.
pub fn allocate_with_breakdown(request: &AllocationRequest) -> AllocationBreakdown {
    let input = normalize::normalize(request);
    let totals = aggregate::aggregate(&input.recoveries, input.shape);
    let achievement = eligibility::target_achievement(totals.total, input.monthly_target);
    let decision = eligibility::evaluate(totals.total, input.min_limit);

    let executive_recoveries = map_to_native(&totals.executives);
    let team_recoveries = map_to_native(&totals.managers);

    if !decision.eligible {
        let result = AllocationResult {
            eligible: false,
            total_recovery: to_native(totals.total),
            target_achievement: achievement,
            executive_recoveries,
            team_recoveries,
            executive_incentives: BTreeMap::new(),
            manager_incentives: BTreeMap::new(),
            head_incentive: 0.0,
            tier_totals: TierTotals::default(),
            total_pool: 0.0,
            reason: decision.reason.clone(),
        };
        return AllocationBreakdown {
            totals,
            monthly_target: input.monthly_target,
            eligibility: decision,
            pool: None,
            distribution: None,
            result,
        };
    }

    let split = pool::size(totals.total);
    let dist = distribution::distribute(&split, &totals);

    let result = AllocationResult {
        eligible: true,
        total_recovery: to_native(totals.total),
        target_achievement: achievement,
        executive_recoveries,
        team_recoveries,
        executive_incentives: map_to_native(&dist.executives),
        manager_incentives: map_to_native::<ManagerId>(&dist.managers),
        head_incentive: to_native(dist.head),
        tier_totals: TierTotals {
            executive: to_native(split.executive),
            manager: to_native(split.manager),
            head: to_native(split.head),
        },
        total_pool: to_native(split.total),
        reason: None,
    };

    AllocationBreakdown {
        totals,
        monthly_target: input.monthly_target,
        eligibility: decision,
        pool: Some(split),
        distribution: Some(dist),
        result,
    }
}
