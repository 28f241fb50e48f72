use anyhow::{anyhow, Result};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::models::{RawAmount, RawRecord};

use super::{today, MoneyScanner};

/// Longest detail text kept per notice; gazette articles can run to pages.
const MAX_DETAIL_CHARS: usize = 1000;

/// Fetch the official gazette front page and extract one record per article.
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
pub fn parse_records(html: &str, url: &str) -> Result<Vec<RawRecord>> {
    let document = Html::parse_document(html);
    let article = Selector::parse("article").map_err(|e| anyhow!("selector: {e}"))?;
    let money = MoneyScanner::new()?;

    let mut records = Vec::new();

    for element in document.select(&article) {
        let text = element.text().collect::<Vec<_>>().join(" ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            continue;
        }

        let amount = money.find(&text).unwrap_or_default();

        records.push(RawRecord {
            date: today(),
            section: "Boletín Oficial CABA".to_string(),
            detail: truncate_chars(&text, MAX_DETAIL_CHARS),
            decision_type: "Publicación normativa".to_string(),
            origin: "CABA".to_string(),
            link: url.to_string(),
            transfer_amount: RawAmount::Text(amount),
            scenario_tag: None,
        });
    }

    Ok(records)
}

/// Truncate on a char boundary; detail text is UTF-8 Spanish prose.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
