use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{IncentiveSettings, UnitMode};

/// Target, eligibility threshold, and the unit the monetary figures are given in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IncentiveConfig {
    /// Monthly recovery target, in `unit_mode` units.
    pub monthly_target: f64,
    /// Minimum total recovery before any incentive is paid, in `unit_mode` units.
    pub min_incentive_limit: f64,
    /// "native" or "lakh".
    pub unit_mode: UnitMode,
}

impl IncentiveConfig {
    pub fn settings(&self) -> IncentiveSettings {
        IncentiveSettings {
            monthly_target: self.monthly_target,
            min_incentive_limit: self.min_incentive_limit,
            unit_mode: self.unit_mode,
        }
    }
}

impl Default for IncentiveConfig {
    fn default() -> Self {
        Self {
            monthly_target: defaults::DEFAULT_MONTHLY_TARGET,
            min_incentive_limit: defaults::DEFAULT_MIN_INCENTIVE_LIMIT,
            unit_mode: UnitMode::default(),
        }
    }
}
