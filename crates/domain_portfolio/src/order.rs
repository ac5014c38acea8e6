//! Rebalancing orders
//!
//! A simulation proposes an ordered sequence of fund trades. List order is
//! display/execution order as received; the backend gives no ordering
//! guarantee beyond it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::snapshot::AssetType;

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    /// Korean display label (매수/매도)
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Buy => "매수",
            OrderType::Sell => "매도",
        }
    }
}

/// One proposed trade from a simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancingOrder {
    pub order_type: OrderType,
    pub asset_type: AssetType,
    pub fund_code: String,
    pub fund_name: String,
    pub order_amount: Decimal,
    pub expected_nav: Decimal,
    pub order_units: Decimal,
    pub fee: Decimal,
    pub reason: String,
}

impl RebalancingOrder {
    pub fn is_buy(&self) -> bool {
        self.order_type == OrderType::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.order_type == OrderType::Sell
    }
}
