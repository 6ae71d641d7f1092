use std::collections::BTreeMap;

use recoup_core::models::{ExecutiveId, Lakhs};

use crate::aggregate::TeamTotals;

/// Two-level proportional split of the executive tier.
///
/// Each manager's team takes `pool × team / total`; inside the team each
/// executive takes `team_pool × own / team`. Executives with no recovery get
/// exactly zero, as do all executives of a team with no recovery.
pub fn distribute(pool: Lakhs, totals: &TeamTotals) -> BTreeMap<ExecutiveId, Lakhs> {
    let mut incentives: BTreeMap<ExecutiveId, Lakhs> = totals
        .executives
        .keys()
        .map(|id| (*id, Lakhs::ZERO))
        .collect();

    if !totals.total.is_positive() {
        return incentives;
    }

    for (&manager, &team_total) in &totals.managers {
        if !team_total.is_positive() {
            continue;
        }
        let team_pool = pool * team_total.share_of(totals.total);

        for (id, recovery) in totals.team_of(manager) {
            if !recovery.is_positive() {
                continue;
            }
            incentives.insert(id, team_pool * recovery.share_of(team_total));
        }
    }

    incentives
}
