use std::path::PathBuf;

use clap::Parser;

use crate::models::Source;

#[derive(Parser, Debug)]
#[command(
    name = "gazette-riskr",
    about = "Scan public procurement gazettes and score corruption risk",
    version
)]
pub struct Cli {
    /// Read the raw notice table from a JSON file instead of scraping
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Config file [default: ./.gazette-riskr/config.toml, fallback ~/.config/gazette-riskr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// CSV output path; use without value to default to risk-report.csv
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "risk-report.csv")]
    pub out: Option<PathBuf>,

    /// Write the CSV under DIR/YYYY/MM/ with a dated filename
    #[arg(long, value_name = "DIR")]
    pub archive_dir: Option<PathBuf>,

    /// Exclude a portal from scraping (repeatable)
    #[arg(long = "exclude-source", value_name = "SOURCE")]
    pub exclude_source: Vec<SourceArg>,

    /// Show low-risk records too (not just medium/high)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Csv,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum SourceArg {
    Gazette,
    Purchases,
}

impl From<&SourceArg> for Source {
    fn from(arg: &SourceArg) -> Self {
        match arg {
            SourceArg::Gazette => Source::Gazette,
            SourceArg::Purchases => Source::Purchases,
        }
    }
}
