//! IRP rebalancing service client

use async_trait::async_trait;

use core_kernel::{CustomerId, JobId};
use domain_portfolio::{
    IrpPortfolio, PortError, PortfolioRecommendation, PortfolioWeights, RebalancingJob,
    RebalancingPort,
};

use crate::dto::rebalancing::{SimulationRequest, WeightsQuery};
use crate::error::ApiError;
use crate::http::HttpClient;

/// Client for the rebalancing and IRP portfolio endpoints
#[derive(Debug, Clone)]
pub struct RebalancingClient {
    http: HttpClient,
}

impl RebalancingClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Generic simulation; defaults to a MANUAL trigger, caller overrides
    /// are merged into the request body
    pub async fn simulate(
        &self,
        customer_id: CustomerId,
        request: SimulationRequest,
    ) -> Result<RebalancingJob, ApiError> {
        self.http
            .post(
                &format!("/irp/rebalancing/{}/simulate", customer_id),
                &request,
            )
            .await
    }

    /// Simulation against the server's own recommendation
    pub async fn simulate_recommended(
        &self,
        customer_id: CustomerId,
    ) -> Result<RebalancingJob, ApiError> {
        self.http
            .post_empty(&format!(
                "/irp/rebalancing/{}/simulate-recommended",
                customer_id
            ))
            .await
    }

    /// Simulation with user-chosen weights, passed as query parameters
    ///
    /// No server-equivalent validation happens here; the UI's sum gate is
    /// the only guard.
    pub async fn simulate_custom(
        &self,
        customer_id: CustomerId,
        weights: PortfolioWeights,
    ) -> Result<RebalancingJob, ApiError> {
        self.http
            .post_query(
                &format!("/irp/rebalancing/{}/simulate-custom", customer_id),
                &WeightsQuery::from(weights),
            )
            .await
    }

    /// Approves a pending job for execution
    pub async fn approve(&self, job_id: JobId) -> Result<RebalancingJob, ApiError> {
        self.http
            .post_empty(&format!("/irp/rebalancing/{}/approve", job_id))
            .await
    }

    /// Point-in-time job read
    pub async fn status(&self, job_id: JobId) -> Result<RebalancingJob, ApiError> {
        self.http
            .get(&format!("/irp/rebalancing/{}/status", job_id))
            .await
    }

    /// Current IRP holdings snapshot
    pub async fn portfolio(&self, customer_id: CustomerId) -> Result<IrpPortfolio, ApiError> {
        self.http
            .get(&format!("/irp/portfolio/{}", customer_id))
            .await
    }

    /// The similar-user portfolio recommendation
    pub async fn similar_user_portfolio(
        &self,
        customer_id: CustomerId,
    ) -> Result<PortfolioRecommendation, ApiError> {
        self.http
            .get(&format!(
                "/irp/portfolio/{}/similar-user-portfolio",
                customer_id
            ))
            .await
    }
}

#[async_trait]
impl RebalancingPort for RebalancingClient {
    async fn simulate_recommended(
        &self,
        customer_id: CustomerId,
    ) -> Result<RebalancingJob, PortError> {
        RebalancingClient::simulate_recommended(self, customer_id)
            .await
            .map_err(PortError::from)
    }

    async fn simulate_custom(
        &self,
        customer_id: CustomerId,
        weights: PortfolioWeights,
    ) -> Result<RebalancingJob, PortError> {
        RebalancingClient::simulate_custom(self, customer_id, weights)
            .await
            .map_err(PortError::from)
    }

    async fn approve(&self, job_id: JobId) -> Result<RebalancingJob, PortError> {
        RebalancingClient::approve(self, job_id)
            .await
            .map_err(PortError::from)
    }

    async fn job_status(&self, job_id: JobId) -> Result<RebalancingJob, PortError> {
        RebalancingClient::status(self, job_id)
            .await
            .map_err(PortError::from)
    }

    async fn portfolio(&self, customer_id: CustomerId) -> Result<IrpPortfolio, PortError> {
        RebalancingClient::portfolio(self, customer_id)
            .await
            .map_err(PortError::from)
    }

    async fn recommendation(
        &self,
        customer_id: CustomerId,
    ) -> Result<PortfolioRecommendation, PortError> {
        RebalancingClient::similar_user_portfolio(self, customer_id)
            .await
            .map_err(PortError::from)
    }
}
