//! The single unit boundary: everything monetary enters as `Lakhs` and
//! leaves as native units.

use std::collections::BTreeMap;

use recoup_core::models::{AllocationRequest, ExecutiveId, Lakhs, TeamShape, UnitMode};
use tracing::warn;

/// A request with every monetary figure in the internal unit.
#[derive(Debug, Clone)]
pub struct NormalizedInput {
    pub recoveries: BTreeMap<ExecutiveId, Lakhs>,
    pub monthly_target: Lakhs,
    pub min_limit: Lakhs,
    pub shape: TeamShape,
}

/// Convert a request into the internal unit.
///
/// Negative and non-finite amounts are treated as zero. The input collector
/// rejects them before they get here; this keeps the allocator total for
/// callers that skip it.
pub fn normalize(request: &AllocationRequest) -> NormalizedInput {
    let mode = request.settings.unit_mode;

    let recoveries = request
        .recoveries
        .iter()
        .map(|(id, raw)| (*id, to_internal(mode, &id.to_string(), *raw)))
        .collect();

    NormalizedInput {
        recoveries,
        monthly_target: to_internal(mode, "monthly_target", request.settings.monthly_target),
        min_limit: to_internal(mode, "min_incentive_limit", request.settings.min_incentive_limit),
        shape: request.shape,
    }
}

fn to_internal(mode: UnitMode, field: &str, raw: f64) -> Lakhs {
    if !raw.is_finite() || raw < 0.0 {
        warn!(field, value = raw, "invalid amount reached the allocator, treating as zero");
        return Lakhs::ZERO;
    }
    mode.to_lakhs(raw)
}

/// Convert an internal amount back to native currency units.
pub fn to_native(amount: Lakhs) -> f64 {
    amount.to_native()
}

/// Convert every value of a map back to native currency units.
pub fn map_to_native<K: Ord + Copy>(map: &BTreeMap<K, Lakhs>) -> BTreeMap<K, f64> {
    map.iter().map(|(k, v)| (*k, v.to_native())).collect()
}
