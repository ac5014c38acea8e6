//! Chart series shaping
//!
//! Fixed-shape rows for the pie and bar charts. Each series has its own
//! value object built at the data-transform boundary; nothing downstream
//! reshapes dynamic maps.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::order::{OrderType, RebalancingOrder};
use crate::snapshot::PortfolioSnapshot;

/// One slice of the allocation pie (현금/예금/펀드)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationSlice {
    pub label: &'static str,
    pub weight: Decimal,
    pub amount: Decimal,
}

/// Builds the three allocation slices of a snapshot, in sleeve order
pub fn allocation_slices(snapshot: &PortfolioSnapshot) -> [AllocationSlice; 3] {
    [
        AllocationSlice {
            label: "현금",
            weight: snapshot.cash_weight,
            amount: snapshot.cash_amount,
        },
        AllocationSlice {
            label: "예금",
            weight: snapshot.deposit_weight,
            amount: snapshot.deposit_amount,
        },
        AllocationSlice {
            label: "펀드",
            weight: snapshot.fund_weight,
            amount: snapshot.fund_amount,
        },
    ]
}

/// One bar of the order-flow chart (매수 or 매도)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderFlowBar {
    pub label: &'static str,
    pub count: usize,
    pub amount: Decimal,
}

/// Buy/sell aggregation over a simulation's orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderFlowSummary {
    pub buy: OrderFlowBar,
    pub sell: OrderFlowBar,
}

impl OrderFlowSummary {
    pub fn from_orders(orders: &[RebalancingOrder]) -> Self {
        let mut buy = OrderFlowBar {
            label: "매수",
            count: 0,
            amount: Decimal::ZERO,
        };
        let mut sell = OrderFlowBar {
            label: "매도",
            count: 0,
            amount: Decimal::ZERO,
        };

        for order in orders {
            match order.order_type {
                OrderType::Buy => {
                    buy.count += 1;
                    buy.amount += order.order_amount;
                }
                OrderType::Sell => {
                    sell.count += 1;
                    sell.amount += order.order_amount;
                }
            }
        }

        Self { buy, sell }
    }
}
