use crate::config::Lexicon;
use crate::models::{RuleMatch, RuleTier};

/// Scan normalized text against the lexicons and return every hit.
///
/// High-tier keywords are checked first, then medium, each list in its
/// configured order. A hit is plain substring containment — no word
/// boundaries, so `"emergencia"` also fires inside `"emergenciamedica"`.
/// Each keyword contributes at most one match no matter how often it occurs.
pub fn match_rules(text: &str, lexicon: &Lexicon) -> Vec<RuleMatch> {
    let mut matches = Vec::new();

    for keyword in &lexicon.high {
        if text.contains(keyword.as_str()) {
            matches.push(RuleMatch {
                tier: RuleTier::High,
                keyword: keyword.clone(),
            });
        }
    }

    for keyword in &lexicon.medium {
        if text.contains(keyword.as_str()) {
            matches.push(RuleMatch {
                tier: RuleTier::Medium,
                keyword: keyword.clone(),
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_lexicon() -> Lexicon {
        Lexicon {
            high: vec!["alpha".to_string(), "beta".to_string()],
            medium: vec!["gamma".to_string()],
        }
    }

    #[test]
    fn test_no_keywords_no_matches() {
        let lex = Lexicon::default();
        assert!(match_rules("compra de papelería", &lex).is_empty());
        assert!(match_rules("", &lex).is_empty());
    }

    #[test]
    fn test_high_before_medium_in_lexicon_order() {
        let lex = tiny_lexicon();
        let found = match_rules("gamma then beta then alpha", &lex);
        let labels: Vec<String> = found.iter().map(|m| m.label()).collect();
        // Output order follows the lexicons, not the text
        assert_eq!(
            labels,
            vec!["High: 'alpha'", "High: 'beta'", "Medium: 'gamma'"]
        );
    }

    #[test]
    fn test_substring_containment_no_word_boundary() {
        let lex = Lexicon::default();
        let found = match_rules("atención de emergenciamedica", &lex);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].keyword, "emergencia");
        assert_eq!(found[0].tier, RuleTier::High);
    }

    #[test]
    fn test_repeated_keyword_matches_once() {
        let lex = tiny_lexicon();
        let found = match_rules("alpha alpha alpha", &lex);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_default_lexicon_scenario() {
        let lex = Lexicon::default();
        let found = match_rules("contratación directa urgente de insumos", &lex);
        let labels: Vec<String> = found.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["High: 'contratación directa'", "High: 'urgente'"]
        );
    }
}
