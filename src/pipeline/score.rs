use crate::models::RuleMatch;

/// Composite risk index: monetary-magnitude term plus the summed weights of
/// the matched rules, rounded to 2 decimals. Pure and total; assumes the
/// amount was already normalized (non-negative, finite).
///
/// Monotone in both inputs: a larger amount bracket or an extra match can
/// only raise the index.
pub fn risk_index(transfer_amount: f64, matches: &[RuleMatch]) -> f64 {
    let rule_term: f64 = matches.iter().map(|m| m.tier.weight()).sum();
    round2(amount_term(transfer_amount) + rule_term)
}

/// Bracket bonus for the monetary magnitude. Thresholds are strict `>` and
/// mutually exclusive — only the highest bracket reached counts.
fn amount_term(amount: f64) -> f64 {
    if amount > 100_000_000.0 {
        4.0
    } else if amount > 20_000_000.0 {
        2.0
    } else if amount > 5_000_000.0 {
        1.0
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
