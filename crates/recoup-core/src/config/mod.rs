//! Configuration loaded from TOML. Every section falls back to the values in
//! [`defaults`] when omitted.

pub mod defaults;
mod export_config;
mod incentive_config;
mod observability_config;
mod team_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use export_config::{ExportConfig, RecoveryStyle};
pub use incentive_config::IncentiveConfig;
pub use observability_config::ObservabilityConfig;
pub use team_config::TeamConfig;

use crate::constants::{
    MAX_EXECUTIVES_PER_MANAGER, MAX_MANAGERS, MIN_EXECUTIVES_PER_MANAGER, MIN_MANAGERS,
};
use crate::errors::ConfigError;

/// Top-level Recoup configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoupConfig {
    pub team: TeamConfig,
    pub incentive: IncentiveConfig,
    pub export: ExportConfig,
    pub observability: ObservabilityConfig,
}

impl RecoupConfig {
    /// Parse a config from a TOML string. Missing fields use defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::ParseError {
            path: "<inline>".into(),
            message: e.to_string(),
        })
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&source).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        ::tracing::debug!(
            path = %path.display(),
            managers = config.team.num_managers,
            executives = config.team.exec_per_manager,
            unit_mode = %config.incentive.unit_mode,
            "loaded config"
        );
        Ok(config)
    }

    /// Check bounds the input collector would otherwise reject later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_MANAGERS..=MAX_MANAGERS).contains(&self.team.num_managers) {
            return Err(ConfigError::InvalidValue {
                field: "team.num_managers".into(),
                message: format!(
                    "must be between {MIN_MANAGERS} and {MAX_MANAGERS}, got {}",
                    self.team.num_managers
                ),
            });
        }
        if !(MIN_EXECUTIVES_PER_MANAGER..=MAX_EXECUTIVES_PER_MANAGER)
            .contains(&self.team.exec_per_manager)
        {
            return Err(ConfigError::InvalidValue {
                field: "team.exec_per_manager".into(),
                message: format!(
                    "must be between {MIN_EXECUTIVES_PER_MANAGER} and {MAX_EXECUTIVES_PER_MANAGER}, got {}",
                    self.team.exec_per_manager
                ),
            });
        }
        for (field, value) in [
            ("incentive.monthly_target", self.incentive.monthly_target),
            ("incentive.min_incentive_limit", self.incentive.min_incentive_limit),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    message: format!("must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
