use serde::{Deserialize, Serialize, Serializer};

/// Scenario sentinel for records whose source never supplied one.
pub const UNDEFINED_SCENARIO: &str = "Undefined";

/// One raw procurement notice as delivered by an ingestion source.
///
/// Every column may be absent in the source data; serde defaults perform the
/// column backfill, so a deserialized `RawRecord` always has every field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub decision_type: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub transfer_amount: RawAmount,
    #[serde(default)]
    pub scenario_tag: Option<String>,
}

/// Monetary value as it arrives from a source: already numeric, or
/// locale-formatted text (`"1.250.000,50"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl Default for RawAmount {
    fn default() -> Self {
        RawAmount::Text(String::new())
    }
}

/// A fully enriched notice after the pipeline has run.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub date: String,
    pub section: String,
    /// Lower-cased, whitespace-collapsed description.
    pub detail: String,
    pub decision_type: String,
    pub origin: String,
    pub link: String,
    /// Parsed monetary value; never negative.
    pub transfer_amount: f64,
    pub matched_rules: Vec<RuleMatch>,
    /// Composite risk score, rounded to 2 decimals.
    pub risk_index: f64,
    pub risk_tier: RiskTier,
    pub scenario_tag: String,
}

/// One keyword hit produced by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub tier: RuleTier,
    pub keyword: String,
}

impl RuleMatch {
    /// Label form carried through reports: `High: 'emergencia'`.
    pub fn label(&self) -> String {
        format!("{}: '{}'", self.tier, self.keyword)
    }
}

impl std::fmt::Display for RuleMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}'", self.tier, self.keyword)
    }
}

impl Serialize for RuleMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Lexicon tier a keyword belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTier {
    High,
    Medium,
}

impl RuleTier {
    /// Contribution of one match to the risk index.
    pub fn weight(self) -> f64 {
        match self {
            RuleTier::High => 3.0,
            RuleTier::Medium => 1.5,
        }
    }
}

impl std::fmt::Display for RuleTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleTier::High => write!(f, "High"),
            RuleTier::Medium => write!(f, "Medium"),
        }
    }
}

/// Risk classification of a record, derived from its risk index alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Medium => write!(f, "Medium"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

/// Aggregate figures over a fully classified table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_records: usize,
    pub count_high: usize,
    pub count_medium: usize,
    pub count_low: usize,
    pub total_amount: f64,
    /// Mean risk index; `None` for an empty table (never NaN).
    pub average_index: Option<f64>,
}

/// An ingestion source the scanner knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Gazette,
    Purchases,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Gazette => write!(f, "Boletín Oficial"),
            Source::Purchases => write!(f, "Compras Públicas"),
        }
    }
}
