use std::collections::BTreeMap;

use recoup_core::models::{Lakhs, ManagerId};

use crate::aggregate::TeamTotals;

/// Manager tier: each manager takes `pool × team / total`.
pub fn distribute(pool: Lakhs, totals: &TeamTotals) -> BTreeMap<ManagerId, Lakhs> {
    totals
        .managers
        .iter()
        .map(|(&manager, &team_total)| (manager, pool * team_total.share_of(totals.total)))
        .collect()
}
