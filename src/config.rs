use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.gazette-riskr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Risk-keyword lexicons used by the rule engine.
    #[serde(default)]
    pub lexicon: Lexicon,
    /// URLs of the scraped portals.
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Ordered keyword lists, one per risk tier.
///
/// Keywords are matched as case-insensitive substrings against the normalized
/// detail text, high tier first, each list in its configured order.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    #[serde(default = "default_high_keywords")]
    pub high: Vec<String>,
    #[serde(default = "default_medium_keywords")]
    pub medium: Vec<String>,
}

impl Default for Lexicon {
    /// Built-in heuristic lexicons for Argentine procurement notices.
    ///
    /// High-tier keywords flag contracting shortcuts (direct awards, declared
    /// emergencies, scope or price amendments); medium-tier keywords flag
    /// procedures that merely warrant a second look.
    fn default() -> Self {
        Lexicon {
            high: default_high_keywords(),
            medium: default_medium_keywords(),
        }
    }
}

fn default_high_keywords() -> Vec<String> {
    [
        "contratación directa",
        "emergencia",
        "excepción",
        "urgente",
        "ampliación",
        "redeterminación",
    ]
    .map(String::from)
    .to_vec()
}

fn default_medium_keywords() -> Vec<String> {
    [
        "licitación privada",
        "adjudicación",
        "prórroga",
        "renovación",
    ]
    .map(String::from)
    .to_vec()
}

/// Portal endpoints for the ingestion sources.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_gazette_url")]
    pub gazette_url: String,
    #[serde(default = "default_purchases_url")]
    pub purchases_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            gazette_url: default_gazette_url(),
            purchases_url: default_purchases_url(),
        }
    }
}

fn default_gazette_url() -> String {
    "https://boletinoficial.buenosaires.gob.ar/".to_string()
}

fn default_purchases_url() -> String {
    "https://buenosairescompras.gob.ar/".to_string()
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.gazette-riskr/config.toml`
/// 3. `~/.config/gazette-riskr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".gazette-riskr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("gazette-riskr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_lexicon_contents() {
        let lex = Lexicon::default();
        assert_eq!(lex.high.len(), 6);
        assert_eq!(lex.medium.len(), 4);
        assert_eq!(lex.high[0], "contratación directa");
        assert_eq!(lex.medium[0], "licitación privada");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[lexicon]
high = ["sobreprecio"]
"#,
        )
        .unwrap();
        assert_eq!(cfg.lexicon.high, vec!["sobreprecio".to_string()]);
        // Unset lists and sections fall back to the built-ins
        assert_eq!(cfg.lexicon.medium.len(), 4);
        assert!(cfg.sources.gazette_url.starts_with("https://"));
    }

    #[test]
    fn test_empty_toml_is_full_default() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.lexicon.high, Lexicon::default().high);
        assert_eq!(cfg.sources.purchases_url, SourcesConfig::default().purchases_url);
    }

    #[test]
    fn test_load_config_override_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[lexicon]
high = ["emergencia"]
medium = ["prórroga"]
"#
        )
        .unwrap();

        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.lexicon.high, vec!["emergencia".to_string()]);
        assert_eq!(cfg.lexicon.medium, vec!["prórroga".to_string()]);
    }
}
