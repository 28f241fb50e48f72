use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;

use crate::models::Record;

/// Write the enriched table as a CSV spreadsheet.
///
/// Matched rules are joined with `"; "` into one cell so the file stays a
/// flat table for spreadsheet consumers.
pub fn write_csv(records: &[Record], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "date",
        "section",
        "detail",
        "decision_type",
        "origin",
        "link",
        "transfer_amount",
        "matched_rules",
        "risk_index",
        "risk_tier",
        "scenario_tag",
    ])?;

    for record in records {
        let rules = record
            .matched_rules
            .iter()
            .map(|m| m.label())
            .collect::<Vec<_>>()
            .join("; ");
        let amount = format!("{:.2}", record.transfer_amount);
        let index = format!("{:.2}", record.risk_index);
        let tier = record.risk_tier.to_string();

        writer.write_record([
            record.date.as_str(),
            record.section.as_str(),
            record.detail.as_str(),
            record.decision_type.as_str(),
            record.origin.as_str(),
            record.link.as_str(),
            amount.as_str(),
            rules.as_str(),
            index.as_str(),
            tier.as_str(),
            record.scenario_tag.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Dated path under `base/YYYY/MM/` for the daily archive run, mirroring the
/// robot's month-bucketed report folders.
pub fn archive_path(base: &Path) -> PathBuf {
    let now = Local::now();
    base.join(now.format("%Y").to_string())
        .join(now.format("%m").to_string())
        .join(format!("caba_report_{}.csv", now.format("%Y%m%d")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RiskTier, RuleMatch, RuleTier, UNDEFINED_SCENARIO};

    fn sample_record() -> Record {
        Record {
            date: "2026-08-29".to_string(),
            section: "Compras Públicas CABA".to_string(),
            detail: "contratación directa urgente de insumos".to_string(),
            decision_type: "Proceso de contratación".to_string(),
            origin: "CABA".to_string(),
            link: "https://example.test/".to_string(),
            transfer_amount: 150_000_000.0,
            matched_rules: vec![
                RuleMatch {
                    tier: RuleTier::High,
                    keyword: "contratación directa".to_string(),
                },
                RuleMatch {
                    tier: RuleTier::High,
                    keyword: "urgente".to_string(),
                },
            ],
            risk_index: 10.0,
            risk_tier: RiskTier::High,
            scenario_tag: UNDEFINED_SCENARIO.to_string(),
        }
    }

    #[test]
    fn test_write_csv_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write_csv(&[sample_record()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date,section,detail,decision_type,origin,link,transfer_amount,matched_rules,risk_index,risk_tier,scenario_tag"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("150000000.00"));
        assert!(row.contains("High: 'contratación directa'; High: 'urgente'"));
        assert!(row.ends_with("Undefined"));
    }

    #[test]
    fn test_write_csv_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2026").join("08").join("report.csv");
        write_csv(&[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_archive_path_is_month_bucketed() {
        let path = archive_path(Path::new("data"));
        let parts: Vec<String> = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "data");
        assert_eq!(parts[1].len(), 4); // YYYY
        assert_eq!(parts[2].len(), 2); // MM
        assert!(parts[3].starts_with("caba_report_"));
        assert!(parts[3].ends_with(".csv"));
    }
}
