use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Lakhs;
use crate::errors::ConfigError;

/// Unit that caller-supplied monetary figures are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    /// Native currency units.
    #[default]
    Native,
    /// Multiples of 100,000 native units.
    #[serde(alias = "scaled", alias = "lakhs")]
    Lakh,
}

impl UnitMode {
    /// Express a caller-supplied amount in the internal unit.
    pub fn to_lakhs(self, raw: f64) -> Lakhs {
        match self {
            UnitMode::Native => Lakhs::from_native(raw),
            UnitMode::Lakh => Lakhs::new(raw),
        }
    }

    /// Express a native amount in this mode's unit.
    pub fn from_native(self, native: f64) -> f64 {
        match self {
            UnitMode::Native => native,
            UnitMode::Lakh => Lakhs::from_native(native).value(),
        }
    }
}

impl fmt::Display for UnitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitMode::Native => write!(f, "native"),
            UnitMode::Lakh => write!(f, "lakh"),
        }
    }
}

impl FromStr for UnitMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(UnitMode::Native),
            "lakh" | "lakhs" | "scaled" => Ok(UnitMode::Lakh),
            other => Err(ConfigError::InvalidValue {
                field: "incentive.unit_mode".into(),
                message: format!("expected \"native\" or \"lakh\", got \"{other}\""),
            }),
        }
    }
}
