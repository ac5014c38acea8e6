//! Request and response envelopes per backend service

pub mod banking;
pub mod insurance;
pub mod rebalancing;
