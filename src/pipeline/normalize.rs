use crate::models::{RawAmount, RawRecord, Record, RiskTier, UNDEFINED_SCENARIO};

/// Turn a raw notice into a working [`Record`] with normalized text and a
/// numeric amount. Total: malformed input degrades, it never errors.
///
/// The rule, score, and tier fields start at their neutral values and are
/// filled in by the later pipeline stages.
pub fn normalize(raw: RawRecord) -> Record {
    Record {
        date: raw.date,
        section: raw.section,
        detail: normalize_text(&raw.detail),
        decision_type: raw.decision_type,
        origin: raw.origin,
        link: raw.link,
        transfer_amount: parse_amount(&raw.transfer_amount),
        matched_rules: Vec::new(),
        risk_index: 0.0,
        risk_tier: RiskTier::Low,
        scenario_tag: raw
            .scenario_tag
            .unwrap_or_else(|| UNDEFINED_SCENARIO.to_string()),
    }
}

/// Lower-case and collapse whitespace runs to single spaces. Idempotent.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a monetary value, assuming the `.`-thousands / `,`-decimal locale.
///
/// Text goes through a fixed sequence: keep only digits, `.`, `,`, `-`;
/// drop every `.` (thousands separator); turn `,` into `.`; parse as f64.
/// `"1.250.000,50"` becomes `1250000.50`. Anything unparsable, negative, or
/// non-finite is clamped to `0.0` — lossy by policy, never an error.
pub fn parse_amount(raw: &RawAmount) -> f64 {
    let value = match raw {
        RawAmount::Number(n) => *n,
        RawAmount::Text(s) => {
            let kept: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
                .collect();
            kept.replace('.', "")
                .replace(',', ".")
                .parse::<f64>()
                .unwrap_or(0.0)
        }
    };

    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
