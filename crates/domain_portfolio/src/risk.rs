//! Advisory risk evaluation
//!
//! Pure classification of a custom weight set against the recommendation.
//! The result is UI copy only; submission is gated solely by the
//! sum-to-100 check on the weights themselves.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::weights::PortfolioWeights;

/// IRP risk-asset ceiling: fund weight above this forces a high rating
pub const FUND_WEIGHT_CAP: Decimal = dec!(70);

/// Deviation above this is rated high
pub const HIGH_DEVIATION: Decimal = dec!(30);

/// Deviation above this (up to the high bound) is rated medium
pub const MEDIUM_DEVIATION: Decimal = dec!(15);

/// Advisory rating levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    High,
    Medium,
    Appropriate,
}

impl RiskLevel {
    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "높음",
            RiskLevel::Medium => "보통",
            RiskLevel::Appropriate => "적정",
        }
    }
}

/// Result of evaluating a custom weight set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Sum of absolute per-sleeve deviations from the recommendation
    pub total_deviation: Decimal,
    /// True when the fund sleeve exceeds the regulatory ceiling
    pub exceeds_fund_cap: bool,
    /// Advisory copy shown under the weight inputs
    pub message: String,
}

/// Classifies custom weights against the recommended weights
///
/// Deviation > 30 rates high, 15 < deviation <= 30 medium, otherwise
/// appropriate. A fund weight above 70% forces a high rating with the
/// regulatory-limit message regardless of deviation.
pub fn evaluate_risk(
    custom: &PortfolioWeights,
    recommended: &PortfolioWeights,
) -> RiskAssessment {
    let total_deviation = custom.deviation_from(recommended);

    if custom.fund > FUND_WEIGHT_CAP {
        return RiskAssessment {
            level: RiskLevel::High,
            total_deviation,
            exceeds_fund_cap: true,
            message: format!(
                "펀드 비중 {}%가 IRP 위험자산 한도(70%)를 초과합니다.",
                custom.fund
            ),
        };
    }

    let (level, message) = if total_deviation > HIGH_DEVIATION {
        (
            RiskLevel::High,
            format!(
                "추천 포트폴리오와의 편차가 {}%로 매우 큽니다.",
                total_deviation
            ),
        )
    } else if total_deviation > MEDIUM_DEVIATION {
        (
            RiskLevel::Medium,
            format!("추천 포트폴리오와의 편차가 {}%입니다.", total_deviation),
        )
    } else {
        (
            RiskLevel::Appropriate,
            "추천 포트폴리오에 가까운 적정 구성입니다.".to_string(),
        )
    };

    RiskAssessment {
        level,
        total_deviation,
        exceeds_fund_cap: false,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommended() -> PortfolioWeights {
        PortfolioWeights::new(dec!(5), dec!(40), dec!(55))
    }

    #[test]
    fn test_small_deviation_is_appropriate() {
        let custom = PortfolioWeights::new(dec!(7), dec!(38), dec!(55));
        let assessment = evaluate_risk(&custom, &recommended());
        assert_eq!(assessment.level, RiskLevel::Appropriate);
        assert_eq!(assessment.total_deviation, dec!(4));
        assert!(!assessment.exceeds_fund_cap);
    }

    #[test]
    fn test_medium_deviation_band() {
        // deviation = 10 + 10 = 20
        let custom = PortfolioWeights::new(dec!(15), dec!(30), dec!(55));
        let assessment = evaluate_risk(&custom, &recommended());
        assert_eq!(assessment.level, RiskLevel::Medium);
    }

    #[test]
    fn test_boundary_at_fifteen_is_appropriate() {
        // deviation exactly 15 stays in the appropriate band
        let custom = PortfolioWeights::new(dec!(12.5), dec!(32.5), dec!(55));
        let assessment = evaluate_risk(&custom, &recommended());
        assert_eq!(assessment.total_deviation, dec!(15));
        assert_eq!(assessment.level, RiskLevel::Appropriate);
    }

    #[test]
    fn test_boundary_at_thirty_is_medium() {
        // deviation exactly 30 stays in the medium band
        let custom = PortfolioWeights::new(dec!(20), dec!(25), dec!(55));
        let assessment = evaluate_risk(&custom, &recommended());
        assert_eq!(assessment.total_deviation, dec!(30));
        assert_eq!(assessment.level, RiskLevel::Medium);
    }

    #[test]
    fn test_large_deviation_is_high() {
        let custom = PortfolioWeights::new(dec!(30), dec!(10), dec!(60));
        let assessment = evaluate_risk(&custom, &recommended());
        assert!(assessment.total_deviation > dec!(30));
        assert_eq!(assessment.level, RiskLevel::High);
    }

    #[test]
    fn test_fund_cap_forces_high_even_with_tiny_deviation() {
        // Recommendation itself is fund-heavy; custom tracks it closely
        let aggressive = PortfolioWeights::new(dec!(5), dec!(22), dec!(73));
        let custom = PortfolioWeights::new(dec!(5), dec!(24), dec!(71));

        let assessment = evaluate_risk(&custom, &aggressive);
        assert_eq!(assessment.level, RiskLevel::High);
        assert!(assessment.exceeds_fund_cap);
        assert!(assessment.message.contains("70%"));
    }

    #[test]
    fn test_fund_cap_boundary_is_inclusive_of_seventy() {
        // Exactly 70 does not trip the cap
        let custom = PortfolioWeights::new(dec!(5), dec!(25), dec!(70));
        let assessment = evaluate_risk(&custom, &recommended());
        assert!(!assessment.exceeds_fund_cap);
    }
}
