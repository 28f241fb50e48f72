use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Record, RiskTier, Summary};

/// Render a colored terminal report.
pub fn render(
    records: &[Record],
    summary: &Summary,
    rules_triggered: &[String],
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let average = summary
        .average_index
        .map(|avg| format!("{:.2}", avg))
        .unwrap_or_else(|| "n/a".to_string());

    if quiet {
        println!(
            "Total: {}  High: {}  Medium: {}  Low: {}  Amount: {:.2}  Avg index: {}",
            summary.total_records,
            summary.count_high.to_string().red(),
            summary.count_medium.to_string().yellow(),
            summary.count_low.to_string().green(),
            summary.total_amount,
            average,
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "gazette-riskr".bold(),
        env!("CARGO_PKG_VERSION")
    );

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Total records      : {}", summary.total_records)
    );
    println!(
        " │  {:<48} │",
        format!("{}  High risk       : {:>4}", "✗".red(), summary.count_high)
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Medium risk     : {:>4}",
            "⚠".yellow(),
            summary.count_medium
        )
    );
    println!(
        " │  {:<48} │",
        format!("{}  Low risk        : {:>4}", "✓".green(), summary.count_low)
    );
    println!(
        " │  {:<48} │",
        format!("Total amount       : {:.2}", summary.total_amount)
    );
    println!(
        " │  {:<48} │",
        format!("Average risk index : {}", average)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if summary.count_high > 0 {
        println!(" {} Records requiring attention:\n", "[HIGH]".red().bold());
        render_table(records, RiskTier::High);
        println!();
    }

    if summary.count_medium > 0 {
        println!(" {} Records worth a second look:\n", "[MEDIUM]".yellow().bold());
        render_table(records, RiskTier::Medium);
        println!();
    }

    if verbose && summary.count_low > 0 {
        println!(" {} Low-risk records:\n", "[LOW]".green().bold());
        render_table(records, RiskTier::Low);
        println!();
    }

    if !rules_triggered.is_empty() {
        println!(" Rules triggered:");
        for label in rules_triggered {
            println!("   • {}", label);
        }
        println!();
    }

    Ok(())
}

fn render_table(records: &[Record], tier_filter: RiskTier) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Date").add_attribute(Attribute::Bold),
            Cell::new("Section").add_attribute(Attribute::Bold),
            Cell::new("Detail").add_attribute(Attribute::Bold),
            Cell::new("Amount").add_attribute(Attribute::Bold),
            Cell::new("Rules").add_attribute(Attribute::Bold),
            Cell::new("Index").add_attribute(Attribute::Bold),
            Cell::new("Tier").add_attribute(Attribute::Bold),
        ]);

    for record in records.iter().filter(|r| r.risk_tier == tier_filter) {
        let tier_color = match record.risk_tier {
            RiskTier::High => Color::Red,
            RiskTier::Medium => Color::Yellow,
            RiskTier::Low => Color::Green,
        };

        let rules = record
            .matched_rules
            .iter()
            .map(|m| m.label())
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            Cell::new(&record.date),
            Cell::new(&record.section),
            Cell::new(shorten(&record.detail, 60)),
            Cell::new(format!("{:.2}", record.transfer_amount))
                .set_alignment(CellAlignment::Right),
            Cell::new(rules),
            Cell::new(format!("{:.2}", record.risk_index))
                .set_alignment(CellAlignment::Right),
            Cell::new(record.risk_tier.to_string())
                .fg(tier_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

/// Clip long detail text for table cells, on a char boundary.
fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max).collect();
    format!("{}…", clipped)
}
