//! HTTP API Layer
//!
//! Typed clients over the backend REST services. Each endpoint call is a
//! fresh round trip through one shared HTTP client; nothing is cached,
//! retried, or deduplicated here; errors bubble to the caller, which
//! decides what to render.
//!
//! # Architecture
//!
//! - **HttpClient**: thin typed verb helpers over `reqwest`
//! - **Clients**: one struct per backend service (banking, rebalancing, insurance)
//! - **DTOs**: request/response envelopes per domain
//! - **Config**: environment-driven endpoints and timeouts

pub mod clients;
pub mod config;
pub mod dto;
pub mod error;
pub mod http;

pub use clients::banking::BankingClient;
pub use clients::insurance::InsuranceClient;
pub use clients::rebalancing::RebalancingClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::HttpClient;
