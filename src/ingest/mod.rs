//! Ingestion collaborators that produce the raw notice table.
//!
//! Each portal module exposes an async `fetch_records(client, url)` plus a
//! pure `parse_records(html, url)` so extraction stays testable offline.
//! A failing source degrades to zero records — the pipeline always receives
//! a well-formed, possibly-empty table, never a network error. The one
//! condition that does propagate is [`read_table`] being handed something
//! that is not a table at all.

pub mod gazette;
pub mod purchases;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use regex::Regex;

use crate::config::SourcesConfig;
use crate::models::{RawAmount, RawRecord, Source};

/// Read a raw table from a JSON file (an array of notice objects; any subset
/// of columns may be absent). A file that does not hold a well-formed table
/// is a structural input error and is the one failure surfaced to the caller.
pub fn read_table(path: &Path) -> Result<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path)?;
    let rows = serde_json::from_str(&content)?;
    Ok(rows)
}

/// Scrape every selected portal concurrently and pool the records.
///
/// Per-source failures are reported on stderr and contribute nothing; only
/// building the HTTP client itself can fail.
pub async fn fetch_all(
    sources: &[Source],
    config: &SourcesConfig,
    quiet: bool,
) -> Result<Vec<RawRecord>> {
    use futures::future::join_all;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let spinner = if !quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_message("Scraping portals...");
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let futures: Vec<_> = sources
        .iter()
        .map(|&source| {
            let client = client.clone();
            let url = match source {
                Source::Gazette => config.gazette_url.clone(),
                Source::Purchases => config.purchases_url.clone(),
            };
            async move {
                let result = match source {
                    Source::Gazette => gazette::fetch_records(&client, &url).await,
                    Source::Purchases => purchases::fetch_records(&client, &url).await,
                };
                (source, result)
            }
        })
        .collect();

    let results = join_all(futures).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let mut all_records = Vec::new();
    for (source, result) in results {
        match result {
            Ok(records) => {
                if !quiet {
                    eprintln!("  {} {} {} records", "→".cyan(), source, records.len());
                }
                all_records.extend(records);
            }
            Err(err) => {
                eprintln!("  {} {}: {}", "✗".red(), source, err);
            }
        }
    }

    Ok(all_records)
}

/// Stand-in row emitted when a scrape run finds nothing at all, so the daily
/// report still documents that the portals were checked.
pub fn placeholder_record() -> RawRecord {
    RawRecord {
        date: today(),
        section: "CABA".to_string(),
        detail: "Sin publicaciones detectadas".to_string(),
        decision_type: "No identificado".to_string(),
        origin: "CABA".to_string(),
        link: String::new(),
        transfer_amount: RawAmount::Number(0.0),
        scenario_tag: None,
    }
}

/// Today's date in the `YYYY-MM-DD` form the record table carries.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Scans scraped text for `$`-prefixed amount tokens.
///
/// Built once per parse run; matching happens once per article or cell.
pub struct MoneyScanner {
    token: Regex,
    shape: Regex,
}

impl MoneyScanner {
    pub fn new() -> Result<Self> {
        Ok(MoneyScanner {
            // Greedy sweep of everything that could belong to the amount
            token: Regex::new(r"\$\s*[0-9.,]+")?,
            // Grouped (`12.500.000`) or unseparated (`12500000`) digits,
            // optionally with two decimals
            shape: Regex::new(r"^(?:\d{1,3}(?:\.\d{3})+|\d+)(?:,\d{2})?$")?,
        })
    }

    /// First `$`-prefixed amount in `text`, locale-formatted
    /// (`$ 12.500.000,00`) or unseparated (`$ 12500000`).
    ///
    /// The whole token must form one coherent number; a token that does not
    /// is rejected outright rather than truncated to a misleading prefix, so
    /// it falls back to the unparsable-amount path like any other bad input.
    pub fn find(&self, text: &str) -> Option<String> {
        let found = self.token.find(text)?;
        // Sentence-final punctuation gets swept up with the digits
        let token = found.as_str().trim_end_matches(|c| c == '.' || c == ',');
        let digits = token
            .strip_prefix('$')
            .unwrap_or(token)
            .trim_start();

        if self.shape.is_match(digits) {
            Some(token.to_string())
        } else {
            None
        }
    }
}
