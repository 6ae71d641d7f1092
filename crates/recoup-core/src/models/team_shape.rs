use serde::{Deserialize, Serialize};

use super::{ExecutiveId, ManagerId};

/// Number of managers and executives per manager.
///
/// Bounds are enforced by the input collector, not here: iteration simply
/// covers whatever ranges the shape holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamShape {
    pub num_managers: u32,
    pub exec_per_manager: u32,
}

impl TeamShape {
    pub const fn new(num_managers: u32, exec_per_manager: u32) -> Self {
        Self {
            num_managers,
            exec_per_manager,
        }
    }

    pub fn managers(self) -> impl Iterator<Item = ManagerId> {
        (1..=self.num_managers).map(ManagerId)
    }

    pub fn executives_of(self, manager: ManagerId) -> impl Iterator<Item = ExecutiveId> {
        (1..=self.exec_per_manager).map(move |e| ExecutiveId::new(manager.0, e))
    }

    /// Every executive, manager-major.
    pub fn executives(self) -> impl Iterator<Item = ExecutiveId> {
        self.managers().flat_map(move |m| self.executives_of(m))
    }

    pub fn contains(self, id: ExecutiveId) -> bool {
        (1..=self.num_managers).contains(&id.manager)
            && (1..=self.exec_per_manager).contains(&id.executive)
    }

    pub fn leaf_count(self) -> usize {
        self.num_managers as usize * self.exec_per_manager as usize
    }
}
