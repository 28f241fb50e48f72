use anyhow::{anyhow, Result};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::models::{RawAmount, RawRecord};

use super::{today, MoneyScanner};

/// Fetch the purchasing portal and extract one record per listing row.
pub async fn fetch_records(client: &Client, url: &str) -> Result<Vec<RawRecord>> {
    let response = client
        .get(url)
        .header("User-Agent", "Mozilla/5.0")
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(Vec::new());
    }

    let html = response.text().await?;
    parse_records(&html, url)
}

/// Pure HTML extraction, testable offline against captured fixtures.
///
/// Listing rows carry agency / description / status in their first three
/// cells; rows with fewer cells are headers or spacers and are skipped.
pub fn parse_records(html: &str, url: &str) -> Result<Vec<RawRecord>> {
    let document = Html::parse_document(html);
    let row = Selector::parse("tr").map_err(|e| anyhow!("selector: {e}"))?;
    let cell = Selector::parse("td").map_err(|e| anyhow!("selector: {e}"))?;
    let money = MoneyScanner::new()?;

    let mut records = Vec::new();

    for element in document.select(&row) {
        let cells: Vec<String> = element
            .select(&cell)
            .map(|c| {
                c.text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        if cells.len() < 3 {
            continue;
        }

        let agency = &cells[0];
        let description = &cells[1];
        let status = &cells[2];

        let amount = cells
            .iter()
            .find_map(|c| money.find(c))
            .unwrap_or_default();

        records.push(RawRecord {
            date: today(),
            section: "Compras Públicas CABA".to_string(),
            detail: format!("{description} ({agency}) - {status}"),
            decision_type: "Proceso de contratación".to_string(),
            origin: "CABA".to_string(),
            link: url.to_string(),
            transfer_amount: RawAmount::Text(amount),
            scenario_tag: None,
        });
    }

    Ok(records)
}
