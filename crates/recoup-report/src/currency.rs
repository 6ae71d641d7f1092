//! Currency and recovery rendering.

use recoup_core::config::RecoveryStyle;

/// Whole currency units grouped by three with commas: `₹120,000`.
///
/// The sign goes before the symbol: `-₹1,500`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{}", group_thousands(rounded.abs() as u64))
}

/// Render a recovery figure according to `style`.
///
/// `Raw` is a plain number rounded to two decimals, so figures rebuilt from
/// lakh sums print as `17000` rather than `16999.999999999996`. Fractions
/// below half a hundredth of a unit are dropped: `0.004` prints as `0` and
/// `1234.567` as `1234.57`.
pub fn format_recovery(value: f64, style: RecoveryStyle, symbol: &str) -> String {
    match style {
        RecoveryStyle::Raw => format_raw(value),
        RecoveryStyle::Currency => format_currency(value, symbol),
    }
}

fn format_raw(value: f64) -> String {
    let cents = (value * 100.0).round() / 100.0;
    // -0.0 prints as "-0".
    if cents == 0.0 {
        return "0".to_string();
    }
    cents.to_string()
}

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
