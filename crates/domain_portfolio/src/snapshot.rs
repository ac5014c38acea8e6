//! Portfolio snapshots and holdings
//!
//! Snapshots are server-computed value objects; a new one is fetched or
//! produced per simulation run and never mutated in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AccountNumber, CustomerId, WireDateTime};

use crate::weights::PortfolioWeights;

/// Point-in-time allocation across the three IRP sleeves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub total_value: Decimal,
    pub cash_weight: Decimal,
    pub deposit_weight: Decimal,
    pub fund_weight: Decimal,
    pub cash_amount: Decimal,
    pub deposit_amount: Decimal,
    pub fund_amount: Decimal,
}

impl PortfolioSnapshot {
    /// The snapshot's weights as a comparable value
    pub fn weights(&self) -> PortfolioWeights {
        PortfolioWeights::new(self.cash_weight, self.deposit_weight, self.fund_weight)
    }
}

/// Asset sleeves a holding can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Cash,
    Deposit,
    Fund,
}

impl AssetType {
    /// Korean sleeve label
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Cash => "현금",
            AssetType::Deposit => "예금",
            AssetType::Fund => "펀드",
        }
    }
}

/// One holding inside the IRP account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrpHolding {
    pub asset_code: String,
    pub asset_name: String,
    pub asset_type: AssetType,
    pub current_value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<WireDateTime>,
}

/// The current holdings view, independent of any simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrpPortfolio {
    pub customer_id: CustomerId,
    pub irp_account_number: AccountNumber,
    pub total_value: Decimal,
    pub cash_balance: Decimal,
    pub deposit_total: Decimal,
    pub fund_total: Decimal,
    pub cash_weight: Decimal,
    pub deposit_weight: Decimal,
    pub fund_weight: Decimal,
    #[serde(default)]
    pub holdings: Vec<IrpHolding>,
}

impl IrpPortfolio {
    /// The portfolio's current weights as a comparable value
    pub fn weights(&self) -> PortfolioWeights {
        PortfolioWeights::new(self.cash_weight, self.deposit_weight, self.fund_weight)
    }
}
