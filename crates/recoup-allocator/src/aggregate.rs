use std::collections::BTreeMap;

use recoup_core::models::{ExecutiveId, Lakhs, ManagerId, TeamShape};

/// Recovery summed per manager and across the whole team.
#[derive(Debug, Clone)]
pub struct TeamTotals {
    /// One entry per executive in the shape, zero when absent from the input.
    pub executives: BTreeMap<ExecutiveId, Lakhs>,
    /// One entry per manager in the shape.
    pub managers: BTreeMap<ManagerId, Lakhs>,
    pub total: Lakhs,
}

impl TeamTotals {
    pub fn manager_total(&self, manager: ManagerId) -> Lakhs {
        self.managers.get(&manager).copied().unwrap_or(Lakhs::ZERO)
    }

    /// Executives belonging to `manager`, in executive order.
    pub fn team_of(&self, manager: ManagerId) -> impl Iterator<Item = (ExecutiveId, Lakhs)> + '_ {
        self.executives
            .range(ExecutiveId::new(manager.0, 0)..ExecutiveId::new(manager.0 + 1, 0))
            .map(|(id, v)| (*id, *v))
    }
}

/// Walk the shape, looking up each executive and defaulting to zero.
/// Entries outside the shape are ignored.
pub fn aggregate(recoveries: &BTreeMap<ExecutiveId, Lakhs>, shape: TeamShape) -> TeamTotals {
    let mut executives = BTreeMap::new();
    let mut managers = BTreeMap::new();
    let mut total = Lakhs::ZERO;

    for manager in shape.managers() {
        let mut team = Lakhs::ZERO;
        for id in shape.executives_of(manager) {
            let recovery = recoveries.get(&id).copied().unwrap_or(Lakhs::ZERO);
            executives.insert(id, recovery);
            team += recovery;
        }
        managers.insert(manager, team);
        total += team;
    }

    TeamTotals {
        executives,
        managers,
        total,
    }
}
