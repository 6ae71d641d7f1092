use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ValidationError;

/// 1-based manager index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManagerId(pub u32);

impl ManagerId {
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Manager {}", self.0)
    }
}

/// Composite key for one executive: `(manager, executive)`, both 1-based.
///
/// Ordering is manager-major, so a `BTreeMap<ExecutiveId, _>` iterates team by
/// team. The string form `manager_{i}_exec_{j}` exists only for input files and
/// JSON map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExecutiveId {
    pub manager: u32,
    pub executive: u32,
}

impl ExecutiveId {
    pub const fn new(manager: u32, executive: u32) -> Self {
        Self { manager, executive }
    }

    pub fn manager_id(self) -> ManagerId {
        ManagerId(self.manager)
    }
}

impl fmt::Display for ExecutiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "manager_{}_exec_{}", self.manager, self.executive)
    }
}

impl FromStr for ExecutiveId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedKey { key: s.to_string() };

        let rest = s.trim().strip_prefix("manager_").ok_or_else(malformed)?;
        let (manager, executive) = rest.split_once("_exec_").ok_or_else(malformed)?;
        let manager: u32 = manager.parse().map_err(|_| malformed())?;
        let executive: u32 = executive.parse().map_err(|_| malformed())?;
        if manager == 0 || executive == 0 {
            return Err(malformed());
        }
        Ok(Self::new(manager, executive))
    }
}

impl Serialize for ExecutiveId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExecutiveId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
