//! Rebalancing session
//!
//! Drives the flow state machine against a `RebalancingPort`: one fetch of
//! the recommendation on initialize (the only automatic call), then
//! user-triggered simulate/approve/cancel. Responses are applied through
//! the flow's tickets, so superseded calls are discarded rather than
//! clobbering newer state.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use core_kernel::CustomerId;

use crate::flow::{FlowActions, FlowError, RebalancingFlow, SimulationKind};
use crate::job::RebalancingJob;
use crate::ports::{PortError, RebalancingPort};
use crate::risk::{evaluate_risk, RiskAssessment};
use crate::weights::PortfolioWeights;

/// Alert copy for a failed simulation call
pub const SIMULATION_FAILED_MESSAGE: &str = "리밸런싱 시뮬레이션에 실패했습니다.";
/// Alert copy for a failed approve call
pub const APPROVAL_FAILED_MESSAGE: &str = "리밸런싱 실행에 실패했습니다.";

/// Errors surfaced to the caller of a session operation
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Port(#[from] PortError),
}

/// One customer's rebalancing screen, flow plus backend handle
pub struct RebalancingSession {
    port: Arc<dyn RebalancingPort>,
    flow: RebalancingFlow,
}

impl RebalancingSession {
    pub fn new(port: Arc<dyn RebalancingPort>, customer_id: CustomerId) -> Self {
        Self {
            port,
            flow: RebalancingFlow::new(customer_id),
        }
    }

    pub fn flow(&self) -> &RebalancingFlow {
        &self.flow
    }

    pub fn set_custom_weights(&mut self, weights: PortfolioWeights) {
        self.flow.set_custom_weights(weights);
    }

    pub fn available_actions(&self) -> FlowActions {
        self.flow.available_actions()
    }

    /// Fetches the recommendation and seeds the weight inputs
    ///
    /// A fetch failure is not an error to the caller: the flow keeps the
    /// fixed default weights and the screen stays fully usable.
    pub async fn initialize(&mut self) {
        let customer_id = self.flow.customer_id();
        match self.port.recommendation(customer_id).await {
            Ok(recommendation) => self.flow.recommendation_loaded(recommendation),
            Err(err) => {
                warn!(%customer_id, error = %err, "Recommendation fetch failed; keeping default weights");
                self.flow.recommendation_failed();
            }
        }
    }

    /// Runs a simulation end to end and leaves the result under review
    pub async fn simulate(
        &mut self,
        kind: SimulationKind,
    ) -> Result<RebalancingJob, SessionError> {
        let ticket = self.flow.begin_simulation(kind)?;
        let customer_id = self.flow.customer_id();

        let result = match kind {
            SimulationKind::Recommended => self.port.simulate_recommended(customer_id).await,
            SimulationKind::Custom => {
                self.port
                    .simulate_custom(customer_id, self.flow.custom_weights())
                    .await
            }
        };

        match result {
            Ok(job) => {
                self.flow.apply_simulation(ticket, job.clone());
                Ok(job)
            }
            Err(err) => {
                self.flow.simulation_failed(ticket, SIMULATION_FAILED_MESSAGE);
                Err(err.into())
            }
        }
    }

    /// Approves the job under review and installs the server's new state
    pub async fn approve(&mut self) -> Result<RebalancingJob, SessionError> {
        let job_id = self
            .flow
            .job()
            .map(|job| job.job_id)
            .ok_or(FlowError::InvalidTransition("no simulation under review"))?;

        self.flow.begin_approval()?;

        match self.port.approve(job_id).await {
            Ok(job) => {
                self.flow.approval_succeeded(job.clone())?;
                Ok(job)
            }
            Err(err) => {
                self.flow.approval_failed(APPROVAL_FAILED_MESSAGE)?;
                Err(err.into())
            }
        }
    }

    /// Discards the pending result locally; no server call
    pub fn cancel(&mut self) -> Result<(), FlowError> {
        self.flow.cancel_review()
    }

    /// Advisory risk rating of the current custom weights
    ///
    /// `None` until a recommendation has been loaded to compare against.
    pub fn risk_assessment(&self) -> Option<RiskAssessment> {
        self.flow.recommendation().map(|recommendation| {
            evaluate_risk(
                &self.flow.custom_weights(),
                &recommendation.recommended_weights(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::tests::{job, snapshot};
    use crate::job::JobStatus;
    use crate::recommendation::{PortfolioMix, PortfolioRecommendation};
    use crate::snapshot::IrpPortfolio;
    use async_trait::async_trait;
    use core_kernel::{AccountNumber, JobId};
    use rust_decimal_macros::dec;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    struct ScriptedPort {
        recommendations: Mutex<VecDeque<Result<PortfolioRecommendation, PortError>>>,
        jobs: Mutex<VecDeque<Result<RebalancingJob, PortError>>>,
    }

    impl ScriptedPort {
        fn with_recommendation(self, result: Result<PortfolioRecommendation, PortError>) -> Self {
            self.recommendations.lock().unwrap().push_back(result);
            self
        }

        fn with_job(self, result: Result<RebalancingJob, PortError>) -> Self {
            self.jobs.lock().unwrap().push_back(result);
            self
        }

        fn next_job(&self) -> Result<RebalancingJob, PortError> {
            self.jobs
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted job response")
        }
    }

    #[async_trait]
    impl RebalancingPort for ScriptedPort {
        async fn simulate_recommended(
            &self,
            _customer_id: CustomerId,
        ) -> Result<RebalancingJob, PortError> {
            self.next_job()
        }

        async fn simulate_custom(
            &self,
            _customer_id: CustomerId,
            _weights: PortfolioWeights,
        ) -> Result<RebalancingJob, PortError> {
            self.next_job()
        }

        async fn approve(&self, _job_id: JobId) -> Result<RebalancingJob, PortError> {
            self.next_job()
        }

        async fn job_status(&self, _job_id: JobId) -> Result<RebalancingJob, PortError> {
            self.next_job()
        }

        async fn portfolio(&self, customer_id: CustomerId) -> Result<IrpPortfolio, PortError> {
            let snap = snapshot();
            Ok(IrpPortfolio {
                customer_id,
                irp_account_number: AccountNumber::new("110-90-000001"),
                total_value: snap.total_value,
                cash_balance: snap.cash_amount,
                deposit_total: snap.deposit_amount,
                fund_total: snap.fund_amount,
                cash_weight: snap.cash_weight,
                deposit_weight: snap.deposit_weight,
                fund_weight: snap.fund_weight,
                holdings: Vec::new(),
            })
        }

        async fn recommendation(
            &self,
            _customer_id: CustomerId,
        ) -> Result<PortfolioRecommendation, PortError> {
            self.recommendations
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted recommendation response")
        }
    }

    fn recommendation() -> PortfolioRecommendation {
        PortfolioRecommendation {
            customer_id: CustomerId::new(1001),
            irp_account_number: None,
            risk_profile_type: None,
            risk_profile_description: None,
            model_portfolio: None,
            similar_user_portfolio: None,
            recommended_portfolio: PortfolioMix {
                weights: PortfolioWeights::new(dec!(10), dec!(30), dec!(60)),
                description: None,
                basis: None,
            },
            metadata: None,
        }
    }

    #[tokio::test]
    async fn test_initialize_seeds_weights_from_recommendation() {
        let port = ScriptedPort::default().with_recommendation(Ok(recommendation()));
        let mut session = RebalancingSession::new(Arc::new(port), CustomerId::new(1001));

        session.initialize().await;

        assert_eq!(
            session.flow().custom_weights(),
            PortfolioWeights::new(dec!(10), dec!(30), dec!(60))
        );
        assert!(session.risk_assessment().is_some());
    }

    #[tokio::test]
    async fn test_initialize_failure_keeps_default_seed() {
        let port = ScriptedPort::default()
            .with_recommendation(Err(PortError::Unavailable("down".to_string())));
        let mut session = RebalancingSession::new(Arc::new(port), CustomerId::new(1001));

        session.initialize().await;

        assert_eq!(
            session.flow().custom_weights(),
            PortfolioWeights::default_seed()
        );
        assert!(session.risk_assessment().is_none());
    }

    #[tokio::test]
    async fn test_simulate_then_approve_roundtrip() {
        let port = ScriptedPort::default()
            .with_job(Ok(job(11, JobStatus::Pending)))
            .with_job(Ok(job(11, JobStatus::Completed)));
        let mut session = RebalancingSession::new(Arc::new(port), CustomerId::new(1001));

        let pending = session.simulate(SimulationKind::Recommended).await.unwrap();
        assert!(pending.is_pending());
        assert!(session.available_actions().can_approve);

        let completed = session.approve().await.unwrap();
        assert!(completed.status.is_completed());
        assert!(!session.available_actions().can_approve);
        assert!(session.flow().success_message().is_some());
    }

    #[tokio::test]
    async fn test_simulation_failure_leaves_screen_retryable() {
        let port = ScriptedPort::default()
            .with_job(Err(PortError::Unavailable("timeout".to_string())))
            .with_job(Ok(job(12, JobStatus::Pending)));
        let mut session = RebalancingSession::new(Arc::new(port), CustomerId::new(1001));

        let err = session.simulate(SimulationKind::Recommended).await.unwrap_err();
        assert!(matches!(err, SessionError::Port(_)));
        assert_eq!(session.flow().last_error(), Some(SIMULATION_FAILED_MESSAGE));

        // Retrying the same action succeeds
        let retried = session.simulate(SimulationKind::Recommended).await.unwrap();
        assert_eq!(retried.job_id, JobId::new(12));
    }

    #[tokio::test]
    async fn test_approval_failure_keeps_pending_job() {
        let port = ScriptedPort::default()
            .with_job(Ok(job(13, JobStatus::Pending)))
            .with_job(Err(PortError::Rejected("이미 처리된 작업".to_string())));
        let mut session = RebalancingSession::new(Arc::new(port), CustomerId::new(1001));

        session.simulate(SimulationKind::Recommended).await.unwrap();
        let err = session.approve().await.unwrap_err();
        assert!(matches!(err, SessionError::Port(_)));

        // The pending job is still under review with approve re-enabled
        assert_eq!(session.flow().job().unwrap().job_id, JobId::new(13));
        assert!(session.available_actions().can_approve);
        assert_eq!(session.flow().last_error(), Some(APPROVAL_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_custom_simulation_respects_gate() {
        let port = ScriptedPort::default();
        let mut session = RebalancingSession::new(Arc::new(port), CustomerId::new(1001));
        session.set_custom_weights(PortfolioWeights::new(dec!(50), dec!(50), dec!(50)));

        let err = session.simulate(SimulationKind::Custom).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Flow(FlowError::WeightsOutOfBalance { .. })
        ));
    }

    #[tokio::test]
    async fn test_cancel_requires_pending_review() {
        let port = ScriptedPort::default().with_job(Ok(job(14, JobStatus::Pending)));
        let mut session = RebalancingSession::new(Arc::new(port), CustomerId::new(1001));

        assert!(session.cancel().is_err());

        session.simulate(SimulationKind::Recommended).await.unwrap();
        session.cancel().unwrap();
        assert!(session.flow().job().is_none());
    }
}
