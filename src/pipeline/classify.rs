use crate::models::RiskTier;

/// Bucket a risk index into its tier. Lower bounds are inclusive: exactly
/// `6.0` is High and exactly `3.0` is Medium.
pub fn classify(risk_index: f64) -> RiskTier {
    if risk_index >= 6.0 {
        RiskTier::High
    } else if risk_index >= 3.0 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_round_up() {
        assert_eq!(classify(2.99), RiskTier::Low);
        assert_eq!(classify(3.0), RiskTier::Medium);
        assert_eq!(classify(5.99), RiskTier::Medium);
        assert_eq!(classify(6.0), RiskTier::High);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0.0), RiskTier::Low);
        assert_eq!(classify(1.5), RiskTier::Low);
        assert_eq!(classify(4.5), RiskTier::Medium);
        assert_eq!(classify(10.0), RiskTier::High);
        assert_eq!(classify(42.0), RiskTier::High);
    }
}
