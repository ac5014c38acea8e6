//! Proptest strategies for domain values

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_portfolio::{JobStatus, PortfolioWeights};

/// Weights in [0, 100] with two decimal places
pub fn arb_weight() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|v| Decimal::new(v, 2))
}

/// Arbitrary weight triples, balanced or not
pub fn arb_weights() -> impl Strategy<Value = PortfolioWeights> {
    (arb_weight(), arb_weight(), arb_weight())
        .prop_map(|(cash, deposit, fund)| PortfolioWeights::new(cash, deposit, fund))
}

/// Weight triples that always pass the sum gate
pub fn arb_balanced_weights() -> impl Strategy<Value = PortfolioWeights> {
    (0i64..=10_000, 0i64..=10_000).prop_filter_map("components exceed 100", |(a, b)| {
        let cash = Decimal::new(a.min(b), 2);
        let deposit = Decimal::new((a.max(b) - a.min(b)).min(10_000 - a.min(b)), 2);
        let fund = dec!(100) - cash - deposit;
        if fund < Decimal::ZERO {
            return None;
        }
        Some(PortfolioWeights::new(cash, deposit, fund))
    })
}

/// Whole-won amounts
pub fn arb_won_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000).prop_map(|v| Decimal::new(v, 0))
}

/// Any job status
pub fn arb_job_status() -> impl Strategy<Value = JobStatus> {
    prop_oneof![
        Just(JobStatus::Pending),
        Just(JobStatus::Approved),
        Just(JobStatus::Executing),
        Just(JobStatus::Completed),
        Just(JobStatus::Cancelled),
        Just(JobStatus::Failed),
    ]
}
