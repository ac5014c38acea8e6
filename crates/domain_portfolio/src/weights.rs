//! Target allocation weights
//!
//! Weights are percentages over the three IRP sleeves (cash, deposit,
//! fund). Custom simulations are gated on the components summing to 100
//! within a 0.1 tolerance; everything else about the weights is advisory.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Allowed deviation of the component sum from 100
pub const WEIGHT_SUM_TOLERANCE: Decimal = dec!(0.1);

/// Target percentages per IRP sleeve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioWeights {
    #[serde(rename = "cashWeight")]
    pub cash: Decimal,
    #[serde(rename = "depositWeight")]
    pub deposit: Decimal,
    #[serde(rename = "fundWeight")]
    pub fund: Decimal,
}

impl PortfolioWeights {
    pub fn new(cash: Decimal, deposit: Decimal, fund: Decimal) -> Self {
        Self { cash, deposit, fund }
    }

    /// The fixed fallback used when no recommendation could be fetched
    pub fn default_seed() -> Self {
        Self::new(dec!(5), dec!(40), dec!(55))
    }

    /// Sum of the three components
    pub fn total(&self) -> Decimal {
        self.cash + self.deposit + self.fund
    }

    /// True when the sum is within tolerance of 100
    pub fn is_balanced(&self) -> bool {
        (self.total() - dec!(100)).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// Validates the sum gate, returning the offending total on failure
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if !self.is_balanced() {
            return Err(PortfolioError::InvalidWeights(format!(
                "components must sum to 100%, got {}%",
                self.total()
            )));
        }
        Ok(())
    }

    /// Sum of absolute per-sleeve differences against another weight set
    pub fn deviation_from(&self, other: &PortfolioWeights) -> Decimal {
        (self.cash - other.cash).abs()
            + (self.deposit - other.deposit).abs()
            + (self.fund - other.fund).abs()
    }
}

impl Default for PortfolioWeights {
    fn default() -> Self {
        Self::default_seed()
    }
}
