use recoup_core::allocation_span;
use recoup_core::models::{AllocationRequest, AllocationResult};
use recoup_core::traits::IAllocator;
use tracing::{debug, info};

use crate::allocation::{self, AllocationBreakdown};

/// Allocation engine: the pure allocation wrapped in a tracing span.
///
/// Stateless, so one engine can serve any number of callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllocationEngine;

impl AllocationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Allocate and keep every intermediate step.
    pub fn allocate_with_breakdown(&self, request: &AllocationRequest) -> AllocationBreakdown {
        let span = allocation_span!(
            request.shape.num_managers,
            request.shape.exec_per_manager,
            request.settings.unit_mode
        );
        let _guard = span.enter();

        let breakdown = allocation::allocate_with_breakdown(request);
        let result = &breakdown.result;

        debug!(
            total_lakh = breakdown.totals.total.value(),
            minimum_lakh = breakdown.eligibility.minimum.value(),
            "aggregated team recovery"
        );

        if result.eligible {
            info!(
                total_recovery = result.total_recovery,
                total_pool = result.total_pool,
                achievement = result.target_achievement,
                "allocation complete"
            );
        } else {
            info!(
                total_recovery = result.total_recovery,
                achievement = result.target_achievement,
                "below minimum incentive limit, nothing payable"
            );
        }

        breakdown
    }
}

impl IAllocator for AllocationEngine {
    fn allocate(&self, request: &AllocationRequest) -> AllocationResult {
        self.allocate_with_breakdown(request).result
    }
}
