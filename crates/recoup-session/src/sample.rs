//! Synthetic recovery figures for demonstrations.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use recoup_core::errors::RecoupError;
use recoup_core::models::{ExecutiveId, TeamShape, UnitMode};

/// Named `(base, variance)` pair, native units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleProfile {
    Low,
    Average,
    High,
    /// Wide spread; the lower end clamps to zero, so some executives recover nothing.
    Mixed,
}

impl SampleProfile {
    pub const ALL: [SampleProfile; 4] = [
        SampleProfile::Low,
        SampleProfile::Average,
        SampleProfile::High,
        SampleProfile::Mixed,
    ];

    pub fn base(self) -> f64 {
        match self {
            SampleProfile::Low => 300_000.0,
            SampleProfile::Average => 600_000.0,
            SampleProfile::High => 1_000_000.0,
            SampleProfile::Mixed => 400_000.0,
        }
    }

    pub fn variance(self) -> f64 {
        match self {
            SampleProfile::Low => 150_000.0,
            SampleProfile::Average => 250_000.0,
            SampleProfile::High => 400_000.0,
            SampleProfile::Mixed => 600_000.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SampleProfile::Low => "low",
            SampleProfile::Average => "average",
            SampleProfile::High => "high",
            SampleProfile::Mixed => "mixed",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, RecoupError> {
        name.parse()
    }
}

impl fmt::Display for SampleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleProfile {
    type Err = RecoupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| RecoupError::UnknownProfile { name: s.to_string() })
    }
}

/// Seeded generator: the same profile and seed always produce the same figures.
pub struct SampleGenerator {
    profile: SampleProfile,
    rng: StdRng,
}

impl SampleGenerator {
    pub fn new(profile: SampleProfile, seed: u64) -> Self {
        Self {
            profile,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn profile(&self) -> SampleProfile {
        self.profile
    }

    /// One recovery in whole native units, uniform in `base ± variance`, never negative.
    pub fn draw(&mut self) -> f64 {
        let low = self.profile.base() - self.profile.variance();
        let high = self.profile.base() + self.profile.variance();
        self.rng.gen_range(low..=high).max(0.0).round()
    }

    /// One figure per executive in `shape`, expressed in `unit_mode`.
    pub fn generate(&mut self, shape: TeamShape, unit_mode: UnitMode) -> BTreeMap<ExecutiveId, f64> {
        shape
            .executives()
            .map(|id| (id, unit_mode.from_native(self.draw())))
            .collect()
    }
}
