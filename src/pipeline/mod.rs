//! Risk analysis pipeline — the decision core of the scanner.
//!
//! Data flows strictly left to right: raw table → normalized → rule-matched →
//! scored → classified → (summary, distinct-rule list). Every stage is a
//! stateless transform over one record; records are enriched whole, so a run
//! can be aborted between records without a half-mutated row ever being
//! observable, and independent tables can be analyzed in parallel with no
//! coordination.
//!
//! - [`normalize`] — column backfill, text normalization, locale amount parse
//! - [`rules`] — keyword lexicon matching
//! - [`score`] — composite risk index
//! - [`classify`] — index → tier
//! - [`aggregate`] — summary figures and the distinct-rule list

pub mod aggregate;
pub mod classify;
pub mod normalize;
pub mod rules;
pub mod score;

use crate::config::Lexicon;
use crate::models::{RawRecord, Record, Summary};

/// Everything one pipeline run produces.
#[derive(Debug)]
pub struct Analysis {
    pub records: Vec<Record>,
    pub summary: Summary,
    pub rules_triggered: Vec<String>,
}

/// Run the full pipeline over a raw table.
///
/// Consumes the table (the caller's original is never touched) and never
/// fails: malformed rows degrade per stage instead of erroring.
pub fn analyze(rows: Vec<RawRecord>, lexicon: &Lexicon) -> Analysis {
    let records: Vec<Record> = rows
        .into_iter()
        .map(|raw| {
            let mut record = normalize::normalize(raw);
            record.matched_rules = rules::match_rules(&record.detail, lexicon);
            record.risk_index = score::risk_index(record.transfer_amount, &record.matched_rules);
            record.risk_tier = classify::classify(record.risk_index);
            record
        })
        .collect();

    let summary = aggregate::summarize(&records);
    let rules_triggered = aggregate::distinct_rules(&records);

    Analysis {
        records,
        summary,
        rules_triggered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawAmount, RiskTier, UNDEFINED_SCENARIO};

    fn row(detail: &str, amount: &str) -> RawRecord {
        RawRecord {
            detail: detail.to_string(),
            transfer_amount: RawAmount::Text(amount.to_string()),
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_urgent_direct_contract_scenario() {
        let rows = vec![row(
            "Contratación Directa urgente de insumos",
            "150.000.000,00",
        )];
        let analysis = analyze(rows, &Lexicon::default());

        let record = &analysis.records[0];
        assert_eq!(record.detail, "contratación directa urgente de insumos");
        assert_eq!(record.transfer_amount, 150_000_000.0);
        assert_eq!(record.matched_rules.len(), 2);
        // amount term 4.0 + two high matches 6.0
        assert_eq!(record.risk_index, 10.0);
        assert_eq!(record.risk_tier, RiskTier::High);
        assert_eq!(
            analysis.rules_triggered,
            vec!["High: 'contratación directa'", "High: 'urgente'"]
        );
    }

    #[test]
    fn test_stationery_purchase_scenario() {
        let rows = vec![row("compra de papelería", "3.000,00")];
        let analysis = analyze(rows, &Lexicon::default());

        let record = &analysis.records[0];
        assert_eq!(record.transfer_amount, 3_000.0);
        assert!(record.matched_rules.is_empty());
        assert_eq!(record.risk_index, 0.0);
        assert_eq!(record.risk_tier, RiskTier::Low);
        assert!(analysis.rules_triggered.is_empty());
    }

    #[test]
    fn test_empty_table() {
        let analysis = analyze(Vec::new(), &Lexicon::default());
        assert!(analysis.records.is_empty());
        assert_eq!(analysis.summary.total_records, 0);
        assert_eq!(analysis.summary.count_high, 0);
        assert_eq!(analysis.summary.count_medium, 0);
        assert_eq!(analysis.summary.count_low, 0);
        assert_eq!(analysis.summary.total_amount, 0.0);
        assert_eq!(analysis.summary.average_index, None);
        assert!(analysis.rules_triggered.is_empty());
    }

    #[test]
    fn test_tier_counts_round_trip() {
        let rows = vec![
            row("compra menor", "100,00"),
            row("adjudicación y prórroga de servicio", "0"),
            row("emergencia sanitaria urgente", "30.000.000,00"),
        ];
        let analysis = analyze(rows, &Lexicon::default());
        let s = &analysis.summary;
        assert_eq!(s.count_high + s.count_medium + s.count_low, s.total_records);
        assert_eq!(s.total_records, 3);
    }

    #[test]
    fn test_amount_monotonicity_through_pipeline() {
        let lexicon = Lexicon::default();
        let detail = "renovación de contrato";
        let small = analyze(vec![row(detail, "1.000,00")], &lexicon);
        let large = analyze(vec![row(detail, "500.000.000,00")], &lexicon);
        assert!(large.records[0].risk_index >= small.records[0].risk_index);
    }

    #[test]
    fn test_missing_columns_backfilled_in_output() {
        let rows: Vec<RawRecord> = serde_json::from_str(r#"[{"detail": "Excepción al régimen"}]"#).unwrap();
        let analysis = analyze(rows, &Lexicon::default());

        let record = &analysis.records[0];
        assert_eq!(record.date, "");
        assert_eq!(record.section, "");
        assert_eq!(record.transfer_amount, 0.0);
        assert_eq!(record.scenario_tag, UNDEFINED_SCENARIO);
        assert_eq!(record.matched_rules[0].label(), "High: 'excepción'");
    }

    #[test]
    fn test_injected_lexicon_replaces_defaults() {
        let lexicon = Lexicon {
            high: vec!["sobreprecio".to_string()],
            medium: vec![],
        };
        let analysis = analyze(
            vec![row("denuncia por sobreprecio en contratación directa", "0")],
            &lexicon,
        );
        // Only the injected lexicon matters; the built-in keywords are gone
        assert_eq!(analysis.rules_triggered, vec!["High: 'sobreprecio'"]);
        assert_eq!(analysis.records[0].risk_index, 3.0);
        assert_eq!(analysis.records[0].risk_tier, RiskTier::Medium);
    }
}
