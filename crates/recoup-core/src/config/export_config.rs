use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// How recovery figures are rendered in exports.
///
/// Incentives are always rendered as currency. Recoveries default to the raw
/// number so existing export consumers keep parsing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStyle {
    #[default]
    Raw,
    Currency,
}

impl fmt::Display for RecoveryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryStyle::Raw => write!(f, "raw"),
            RecoveryStyle::Currency => write!(f, "currency"),
        }
    }
}

impl FromStr for RecoveryStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(RecoveryStyle::Raw),
            "currency" => Ok(RecoveryStyle::Currency),
            other => Err(ConfigError::InvalidValue {
                field: "export.recovery_style".into(),
                message: format!("expected \"raw\" or \"currency\", got \"{other}\""),
            }),
        }
    }
}

/// Report export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Prefix placed before formatted currency amounts.
    pub currency_symbol: String,
    /// Rendering of recovery columns.
    pub recovery_style: RecoveryStyle,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: defaults::DEFAULT_CURRENCY_SYMBOL.to_string(),
            recovery_style: defaults::DEFAULT_RECOVERY_STYLE
                .parse()
                .unwrap_or_default(),
        }
    }
}
