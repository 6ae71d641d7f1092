use std::collections::BTreeMap;

use proptest::prelude::*;
use recoup_allocator::allocate;
use recoup_core::models::*;

fn arb_shape() -> impl Strategy<Value = TeamShape> {
    (1u32..=10, 1u32..=15).prop_map(|(m, e)| TeamShape::new(m, e))
}

/// Recoveries in lakhs, roughly a third of them zero.
fn arb_request(unit_mode: UnitMode) -> impl Strategy<Value = AllocationRequest> {
    arb_shape().prop_flat_map(move |shape| {
        let n = shape.leaf_count();
        (
            prop::collection::vec(prop_oneof![1 => Just(0.0), 2 => 0.01f64..50.0], n),
            0.0f64..500.0,
            0.0f64..20.0,
        )
            .prop_map(move |(values, target, limit)| {
                let scale = match unit_mode {
                    UnitMode::Lakh => 1.0,
                    UnitMode::Native => 100_000.0,
                };
                let recoveries: BTreeMap<_, _> = shape
                    .executives()
                    .zip(values)
                    .map(|(id, v)| (id, v * scale))
                    .collect();
                AllocationRequest::new(
                    recoveries,
                    IncentiveSettings {
                        monthly_target: target * scale,
                        min_incentive_limit: limit * scale,
                        unit_mode,
                    },
                    shape,
                )
            })
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn pool_is_conserved(req in arb_request(UnitMode::Lakh)) {
        let result = allocate(&req);
        prop_assume!(result.eligible);

        prop_assert!(close(result.total_pool, result.total_recovery * 0.20));
        prop_assert!(close(
            result.tier_totals.executive + result.tier_totals.manager + result.head_incentive,
            result.total_pool
        ));
        prop_assert!(result.is_reconciled());
    }

    #[test]
    fn tiers_split_sixty_twenty_five_fifteen(req in arb_request(UnitMode::Lakh)) {
        let result = allocate(&req);
        prop_assume!(result.eligible && result.total_pool > 0.0);

        prop_assert!(close(result.tier_totals.executive / result.total_pool, 0.60));
        prop_assert!(close(result.tier_totals.manager / result.total_pool, 0.25));
        prop_assert!(close(result.head_incentive / result.total_pool, 0.15));
    }

    #[test]
    fn incentives_proportional_within_team(req in arb_request(UnitMode::Lakh)) {
        let result = allocate(&req);
        prop_assume!(result.eligible);

        for manager in req.shape.managers() {
            let team: Vec<_> = req
                .shape
                .executives_of(manager)
                .map(|id| (result.executive_recoveries[&id], result.executive_incentives[&id]))
                .filter(|(r, _)| *r > 0.0)
                .collect();
            for pair in team.windows(2) {
                let (r1, i1) = pair[0];
                let (r2, i2) = pair[1];
                prop_assert!(close(i1 / i2, r1 / r2), "ratio {} vs {}", i1 / i2, r1 / r2);
            }
        }
    }

    #[test]
    fn zero_recovery_means_zero_incentive(req in arb_request(UnitMode::Lakh)) {
        let result = allocate(&req);
        for (id, incentive) in &result.executive_incentives {
            if result.executive_recoveries[id] == 0.0 {
                prop_assert_eq!(*incentive, 0.0);
            }
        }
        for (manager, incentive) in &result.manager_incentives {
            if result.team_recoveries[manager] == 0.0 {
                prop_assert_eq!(*incentive, 0.0);
            }
        }
    }

    #[test]
    fn incentives_never_negative(req in arb_request(UnitMode::Native)) {
        let result = allocate(&req);
        prop_assert!(result.executive_incentives.values().all(|v| *v >= 0.0));
        prop_assert!(result.manager_incentives.values().all(|v| *v >= 0.0));
        prop_assert!(result.head_incentive >= 0.0);
    }

    #[test]
    fn ineligible_results_pay_nothing(
        req in arb_request(UnitMode::Native),
        shortfall in 1.0f64..1_000_000.0,
    ) {
        let total: f64 = req.recoveries.values().sum();
        let mut req = req;
        req.settings.min_incentive_limit = total + shortfall;

        let result = allocate(&req);
        prop_assert!(!result.eligible);
        prop_assert!(result.reason.is_some());
        prop_assert!(result.executive_incentives.is_empty());
        prop_assert!(result.manager_incentives.is_empty());
        prop_assert_eq!(result.head_incentive, 0.0);
        prop_assert_eq!(result.total_pool, 0.0);
    }

    #[test]
    fn one_native_unit_short_is_ineligible_at_any_scale(limit in 1u64..1_000_000_000_000) {
        let limit = limit as f64;
        let mut recoveries = BTreeMap::new();
        recoveries.insert(ExecutiveId::new(1, 1), limit - 1.0);
        let req = AllocationRequest::new(
            recoveries,
            IncentiveSettings {
                monthly_target: 0.0,
                min_incentive_limit: limit,
                unit_mode: UnitMode::Native,
            },
            TeamShape::new(1, 1),
        );
        prop_assert!(!allocate(&req).eligible);
    }

    #[test]
    fn native_and_lakh_inputs_agree(req in arb_request(UnitMode::Lakh)) {
        let native = AllocationRequest::new(
            req.recoveries.iter().map(|(id, v)| (*id, v * 100_000.0)).collect(),
            IncentiveSettings {
                monthly_target: req.settings.monthly_target * 100_000.0,
                min_incentive_limit: req.settings.min_incentive_limit * 100_000.0,
                unit_mode: UnitMode::Native,
            },
            req.shape,
        );
        let a = allocate(&req);
        let b = allocate(&native);

        // Skip draws sitting on the eligibility boundary within float noise.
        prop_assume!(a.eligible == b.eligible);
        prop_assert!(close(a.total_recovery, b.total_recovery));
        prop_assert!(close(a.total_pool, b.total_pool));
        prop_assert!(close(a.target_achievement, b.target_achievement));
        for (id, v) in &a.executive_incentives {
            prop_assert!(close(*v, b.executive_incentives[id]));
        }
    }
}
