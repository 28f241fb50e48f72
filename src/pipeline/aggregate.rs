use crate::models::{Record, RiskTier, Summary};

/// Aggregate the classified table into summary figures.
///
/// Tier counts always sum to `total_records`. The average index is `None`
/// for an empty table rather than NaN or a silent zero.
pub fn summarize(records: &[Record]) -> Summary {
    let total_records = records.len();

    let count_high = records
        .iter()
        .filter(|r| r.risk_tier == RiskTier::High)
        .count();
    let count_medium = records
        .iter()
        .filter(|r| r.risk_tier == RiskTier::Medium)
        .count();
    let count_low = records
        .iter()
        .filter(|r| r.risk_tier == RiskTier::Low)
        .count();

    let total_amount = records.iter().map(|r| r.transfer_amount).sum();

    let average_index = if total_records == 0 {
        None
    } else {
        let sum: f64 = records.iter().map(|r| r.risk_index).sum();
        Some(sum / total_records as f64)
    };

    Summary {
        total_records,
        count_high,
        count_medium,
        count_low,
        total_amount,
        average_index,
    }
}

/// Unique rule labels across the whole table, in order of first appearance.
pub fn distinct_rules(records: &[Record]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        for rule in &record.matched_rules {
            let label = rule.label();
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
    }
    seen
}
