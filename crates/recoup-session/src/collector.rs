//! Input validation at the boundary. The allocator assumes what this module
//! enforces: shape within bounds, amounts finite and non-negative, ids inside
//! the shape.

use std::collections::BTreeMap;

use recoup_core::constants::{
    MAX_EXECUTIVES_PER_MANAGER, MAX_MANAGERS, MIN_EXECUTIVES_PER_MANAGER, MIN_MANAGERS,
};
use recoup_core::errors::{RecoupResult, ValidationError};
use recoup_core::models::{AllocationRequest, ExecutiveId, IncentiveSettings, TeamShape};

/// Validate team-shape counters.
pub fn validate_shape(num_managers: u32, exec_per_manager: u32) -> Result<TeamShape, ValidationError> {
    if !(MIN_MANAGERS..=MAX_MANAGERS).contains(&num_managers) {
        return Err(ValidationError::ManagersOutOfRange {
            got: num_managers,
            min: MIN_MANAGERS,
            max: MAX_MANAGERS,
        });
    }
    if !(MIN_EXECUTIVES_PER_MANAGER..=MAX_EXECUTIVES_PER_MANAGER).contains(&exec_per_manager) {
        return Err(ValidationError::ExecutivesOutOfRange {
            got: exec_per_manager,
            min: MIN_EXECUTIVES_PER_MANAGER,
            max: MAX_EXECUTIVES_PER_MANAGER,
        });
    }
    Ok(TeamShape::new(num_managers, exec_per_manager))
}

/// A monetary amount must be finite and non-negative.
pub fn validate_amount(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteAmount {
            field: field.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

pub fn validate_settings(settings: &IncentiveSettings) -> Result<(), ValidationError> {
    validate_amount("monthly_target", settings.monthly_target)?;
    validate_amount("min_incentive_limit", settings.min_incentive_limit)?;
    Ok(())
}

/// Validate one executive's entry against the shape.
pub fn validate_entry(id: ExecutiveId, value: f64, shape: TeamShape) -> Result<f64, ValidationError> {
    if !shape.contains(id) {
        return Err(ValidationError::UnknownExecutive {
            id: id.to_string(),
            managers: shape.num_managers,
            executives: shape.exec_per_manager,
        });
    }
    validate_amount(&id.to_string(), value)
}

/// Parse a mapping keyed by `manager_{i}_exec_{j}` into typed ids.
pub fn collect_keyed(
    raw: &BTreeMap<String, f64>,
    shape: TeamShape,
) -> RecoupResult<BTreeMap<ExecutiveId, f64>> {
    let mut recoveries = BTreeMap::new();
    for (key, value) in raw {
        let id: ExecutiveId = key.parse()?;
        let value = validate_entry(id, *value, shape)?;
        recoveries.insert(id, value);
    }
    Ok(recoveries)
}

/// Validate everything and assemble an allocator request.
pub fn build_request(
    shape: TeamShape,
    settings: IncentiveSettings,
    recoveries: BTreeMap<ExecutiveId, f64>,
) -> RecoupResult<AllocationRequest> {
    let shape = validate_shape(shape.num_managers, shape.exec_per_manager)?;
    validate_settings(&settings)?;
    for (id, value) in &recoveries {
        validate_entry(*id, *value, shape)?;
    }
    Ok(AllocationRequest::new(recoveries, settings, shape))
}
