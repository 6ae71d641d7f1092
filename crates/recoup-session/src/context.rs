//! SessionContext: the entered figures for one person's calculation session.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use recoup_core::config::RecoupConfig;
use recoup_core::errors::RecoupResult;
use recoup_core::models::{
    AllocationRequest, AllocationResult, ExecutiveId, IncentiveSettings, TeamShape, UnitMode,
};
use recoup_core::traits::IAllocator;

use crate::collector;
use crate::sample::SampleGenerator;

/// Mutable, caller-owned state behind an input form.
///
/// Every mutation is validated. The allocator only ever sees a
/// [`snapshot`](Self::snapshot), never the context itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Unique session identifier.
    pub session_id: String,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Last mutation or calculation.
    pub last_activity: DateTime<Utc>,
    shape: TeamShape,
    settings: IncentiveSettings,
    /// Entered recoveries, in `settings.unit_mode` units.
    recoveries: BTreeMap<ExecutiveId, f64>,
    /// Total calculations run in this session.
    calculations: u64,
}

impl SessionContext {
    /// Create a new session with validated shape and settings.
    pub fn new(
        session_id: String,
        shape: TeamShape,
        settings: IncentiveSettings,
    ) -> RecoupResult<Self> {
        let shape = collector::validate_shape(shape.num_managers, shape.exec_per_manager)?;
        collector::validate_settings(&settings)?;
        let now = Utc::now();
        Ok(Self {
            session_id,
            created_at: now,
            last_activity: now,
            shape,
            settings,
            recoveries: BTreeMap::new(),
            calculations: 0,
        })
    }

    /// Create a session from the team and incentive sections of a config.
    pub fn from_config(session_id: String, config: &RecoupConfig) -> RecoupResult<Self> {
        Self::new(session_id, config.team.shape(), config.incentive.settings())
    }

    pub fn shape(&self) -> TeamShape {
        self.shape
    }

    pub fn settings(&self) -> IncentiveSettings {
        self.settings
    }

    /// Entered figures, manager-major.
    pub fn recoveries(&self) -> &BTreeMap<ExecutiveId, f64> {
        &self.recoveries
    }

    /// The entered figure for `id`, zero when nothing was entered.
    pub fn recovery(&self, id: ExecutiveId) -> f64 {
        self.recoveries.get(&id).copied().unwrap_or(0.0)
    }

    pub fn calculations(&self) -> u64 {
        self.calculations
    }

    /// Record a figure for one executive.
    pub fn set_recovery(&mut self, id: ExecutiveId, value: f64) -> RecoupResult<()> {
        let value = collector::validate_entry(id, value, self.shape)?;
        self.recoveries.insert(id, value);
        self.touch();
        Ok(())
    }

    /// Record a figure addressed by its `manager_{i}_exec_{j}` key.
    pub fn set_recovery_key(&mut self, key: &str, value: f64) -> RecoupResult<()> {
        let id: ExecutiveId = key.parse()?;
        self.set_recovery(id, value)
    }

    /// Remove the figure for one executive, returning what was entered.
    pub fn clear_recovery(&mut self, id: ExecutiveId) -> Option<f64> {
        let removed = self.recoveries.remove(&id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Change the team shape. Entered figures no longer line up with a new
    /// shape, so they are all discarded when it actually changes.
    ///
    /// Returns whether the figures were reset.
    pub fn resize(&mut self, shape: TeamShape) -> RecoupResult<bool> {
        let shape = collector::validate_shape(shape.num_managers, shape.exec_per_manager)?;
        if shape == self.shape {
            return Ok(false);
        }
        debug!(
            session_id = %self.session_id,
            discarded = self.recoveries.len(),
            managers = shape.num_managers,
            executives = shape.exec_per_manager,
            "team shape changed, resetting entered figures"
        );
        self.shape = shape;
        self.recoveries.clear();
        self.touch();
        Ok(true)
    }

    /// Replace target, threshold, and unit mode. When the unit mode changes,
    /// entered figures are converted so they keep representing the same money.
    pub fn set_settings(&mut self, settings: IncentiveSettings) -> RecoupResult<()> {
        collector::validate_settings(&settings)?;
        let previous = self.settings.unit_mode;
        if previous != settings.unit_mode {
            for value in self.recoveries.values_mut() {
                *value = convert(*value, previous, settings.unit_mode);
            }
            debug!(
                session_id = %self.session_id,
                from = %previous,
                to = %settings.unit_mode,
                "unit mode changed, converted entered figures"
            );
        }
        self.settings = settings;
        self.touch();
        Ok(())
    }

    /// Replace every figure with generated sample data.
    pub fn fill_sample(&mut self, generator: &mut SampleGenerator) {
        self.recoveries = generator.generate(self.shape, self.settings.unit_mode);
        debug!(
            session_id = %self.session_id,
            profile = %generator.profile(),
            entries = self.recoveries.len(),
            "filled session with sample figures"
        );
        self.touch();
    }

    /// Owned copy of the current inputs for one allocation call.
    pub fn snapshot(&self) -> AllocationRequest {
        AllocationRequest::new(self.recoveries.clone(), self.settings, self.shape)
    }

    /// Run `allocator` over a snapshot and count the calculation.
    pub fn calculate(&mut self, allocator: &dyn IAllocator) -> AllocationResult {
        let result = allocator.allocate(&self.snapshot());
        self.record_calculation();
        result
    }

    /// Count a calculation run outside [`calculate`](Self::calculate).
    pub fn record_calculation(&mut self) {
        self.calculations += 1;
        self.touch();
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

fn convert(value: f64, from: UnitMode, to: UnitMode) -> f64 {
    let native = from.to_lakhs(value).to_native();
    to.from_native(native)
}
