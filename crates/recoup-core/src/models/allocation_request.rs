use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ExecutiveId, TeamShape, UnitMode};

/// Target and threshold for one calculation, in `unit_mode` units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncentiveSettings {
    pub monthly_target: f64,
    pub min_incentive_limit: f64,
    pub unit_mode: UnitMode,
}

/// Immutable input snapshot for one allocation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Recovery per executive, in `settings.unit_mode` units. Missing entries count as zero.
    pub recoveries: BTreeMap<ExecutiveId, f64>,
    pub settings: IncentiveSettings,
    pub shape: TeamShape,
}

impl AllocationRequest {
    pub fn new(
        recoveries: BTreeMap<ExecutiveId, f64>,
        settings: IncentiveSettings,
        shape: TeamShape,
    ) -> Self {
        Self {
            recoveries,
            settings,
            shape,
        }
    }
}
