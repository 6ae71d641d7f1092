use recoup_core::constants::NATIVE_PER_LAKH;
use recoup_core::models::Lakhs;

/// Relative slack on the threshold comparison, so that a total summed from
/// rescaled parts still meets a limit of exactly the same amount.
pub const THRESHOLD_EPSILON: f64 = 1e-9;

/// Upper bound on the slack, in lakhs: a thousandth of a native unit. A total
/// one native unit short of the limit stays ineligible at any magnitude.
pub const MAX_THRESHOLD_SLACK: f64 = 1e-3 / NATIVE_PER_LAKH;

/// Whether `total` meets `minimum`. Equal amounts are eligible.
pub fn is_eligible(total: Lakhs, minimum: Lakhs) -> bool {
    let slack = (THRESHOLD_EPSILON * minimum.value().abs()).min(MAX_THRESHOLD_SLACK);
    total.value() + slack >= minimum.value()
}

/// Eligibility decision with the message shown when nothing is payable.
#[derive(Debug, Clone)]
pub struct EligibilityDecision {
    pub eligible: bool,
    pub total: Lakhs,
    pub minimum: Lakhs,
    pub reason: Option<String>,
}

/// Evaluate the eligibility gate.
pub fn evaluate(total: Lakhs, minimum: Lakhs) -> EligibilityDecision {
    let eligible = is_eligible(total, minimum);
    let reason = (!eligible).then(|| {
        format!(
            "Minimum incentive limit not met: required {:.2} lakh, current total {:.2} lakh. No incentives are payable.",
            minimum.value(),
            total.value()
        )
    });

    EligibilityDecision {
        eligible,
        total,
        minimum,
        reason,
    }
}

/// Percentage of the monthly target reached. 0 when the target is 0.
pub fn target_achievement(total: Lakhs, target: Lakhs) -> f64 {
    if target.value() == 0.0 {
        return 0.0;
    }
    total.value() / target.value() * 100.0
}
