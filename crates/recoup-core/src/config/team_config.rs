use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::TeamShape;

/// Team shape configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    /// Number of managers reporting to the head (1..=10).
    pub num_managers: u32,
    /// Executives per manager (1..=15).
    pub exec_per_manager: u32,
}

impl TeamConfig {
    pub fn shape(&self) -> TeamShape {
        TeamShape::new(self.num_managers, self.exec_per_manager)
    }
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            num_managers: defaults::DEFAULT_NUM_MANAGERS,
            exec_per_manager: defaults::DEFAULT_EXEC_PER_MANAGER,
        }
    }
}
