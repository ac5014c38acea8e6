//! Rebalancing backend port
//!
//! The flow and session are written against this trait so the HTTP client
//! (or a mock in tests) can be swapped in behind it.

use async_trait::async_trait;
use thiserror::Error;

use core_kernel::{CustomerId, JobId};

use crate::job::RebalancingJob;
use crate::recommendation::PortfolioRecommendation;
use crate::snapshot::IrpPortfolio;
use crate::weights::PortfolioWeights;

/// Errors surfaced through the port boundary
#[derive(Debug, Error)]
pub enum PortError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rejected by server: {0}")]
    Rejected(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Operations the rebalancing backend exposes to the client
///
/// Every call is a fresh round trip; no caching or deduplication happens
/// behind this trait.
#[async_trait]
pub trait RebalancingPort: Send + Sync {
    /// Simulation with server-computed target weights
    async fn simulate_recommended(
        &self,
        customer_id: CustomerId,
    ) -> Result<RebalancingJob, PortError>;

    /// Simulation with caller-provided target weights
    ///
    /// The caller is responsible for the sum gate; this call submits the
    /// weights as given.
    async fn simulate_custom(
        &self,
        customer_id: CustomerId,
        weights: PortfolioWeights,
    ) -> Result<RebalancingJob, PortError>;

    /// Approves a pending job for execution
    async fn approve(&self, job_id: JobId) -> Result<RebalancingJob, PortError>;

    /// Point-in-time job read, usable for polling
    async fn job_status(&self, job_id: JobId) -> Result<RebalancingJob, PortError>;

    /// Current holdings, independent of any simulation
    async fn portfolio(&self, customer_id: CustomerId) -> Result<IrpPortfolio, PortError>;

    /// The customer's portfolio recommendation
    async fn recommendation(
        &self,
        customer_id: CustomerId,
    ) -> Result<PortfolioRecommendation, PortError>;
}
