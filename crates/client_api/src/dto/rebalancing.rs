//! Rebalancing service request envelopes

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::CustomerId;
use domain_portfolio::{PortfolioWeights, TriggerType};

/// Body of the generic simulate endpoint
///
/// Defaults to a MANUAL trigger; callers override fields as needed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub customer_id: CustomerId,
    pub trigger_type: TriggerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_weight: Option<Decimal>,
}

impl SimulationRequest {
    /// A manual simulation with no weight overrides
    pub fn manual(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            trigger_type: TriggerType::Manual,
            cash_weight: None,
            deposit_weight: None,
            fund_weight: None,
        }
    }

    pub fn with_trigger(mut self, trigger_type: TriggerType) -> Self {
        self.trigger_type = trigger_type;
        self
    }

    pub fn with_weights(mut self, weights: PortfolioWeights) -> Self {
        self.cash_weight = Some(weights.cash);
        self.deposit_weight = Some(weights.deposit);
        self.fund_weight = Some(weights.fund);
        self
    }
}

/// Query parameters of the simulate-custom endpoint
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightsQuery {
    pub cash_weight: Decimal,
    pub deposit_weight: Decimal,
    pub fund_weight: Decimal,
}

impl From<PortfolioWeights> for WeightsQuery {
    fn from(weights: PortfolioWeights) -> Self {
        Self {
            cash_weight: weights.cash,
            deposit_weight: weights.deposit,
            fund_weight: weights.fund,
        }
    }
}
