//! Custom assertions

use rust_decimal::Decimal;

use domain_portfolio::PortfolioWeights;

/// Asserts two decimals agree within a tolerance
pub fn assert_decimal_approx(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= tolerance,
        "expected {} ≈ {} (tolerance {}), delta was {}",
        actual,
        expected,
        tolerance,
        delta
    );
}

/// Asserts a weight set passes the sum gate
pub fn assert_balanced(weights: &PortfolioWeights) {
    assert!(
        weights.is_balanced(),
        "weights {:?} sum to {}, expected 100 ± 0.1",
        weights,
        weights.total()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_approx_within_tolerance() {
        assert_decimal_approx(dec!(99.95), dec!(100), dec!(0.1));
    }

    #[test]
    #[should_panic(expected = "delta was")]
    fn test_decimal_approx_outside_tolerance() {
        assert_decimal_approx(dec!(99), dec!(100), dec!(0.1));
    }

    #[test]
    fn test_assert_balanced_on_seed() {
        assert_balanced(&PortfolioWeights::default_seed());
    }
}
