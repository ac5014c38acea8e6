//! Rebalancing review flow
//!
//! The client-side state machine behind the rebalancing screen. It owns
//! the custom-weight inputs, the fetched recommendation, and the job under
//! review, and decides which actions are available at any moment.
//!
//! Every simulation start bumps a generation counter and hands out a
//! ticket; a response is applied only if its ticket is still current, so a
//! slow response from a superseded simulation can never overwrite a newer
//! one.
//!
//! # Invariants
//!
//! - A new simulation clears the displayed result before the request resolves
//! - Only a PENDING job under review can be approved or cancelled
//! - Cancel discards local state only; no server call is made
//! - A failed approval retains the prior pending job under review
//! - Status always reflects the server's latest response, never a local guess

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use core_kernel::CustomerId;

use crate::job::RebalancingJob;
use crate::recommendation::PortfolioRecommendation;
use crate::weights::PortfolioWeights;

/// Which simulation the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimulationKind {
    /// Server-computed target weights
    Recommended,
    /// User-entered weights (gated on the sum check)
    Custom,
}

/// Proof that a simulation was started; pairs a response with its request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationTicket {
    generation: u64,
}

/// Errors raised on illegal flow transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("Target weights must sum to 100% (got {total}%)")]
    WeightsOutOfBalance { total: Decimal },

    #[error("Invalid flow transition: {0}")]
    InvalidTransition(&'static str),
}

/// The flow's current position
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    /// Nothing in flight, no result displayed
    Idle,
    /// A simulation request is outstanding
    Simulating { kind: SimulationKind },
    /// A simulation result is displayed for review
    Reviewing { job: RebalancingJob },
    /// An approve request is outstanding
    Approving { job: RebalancingJob },
}

/// Which buttons the review screen enables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowActions {
    pub can_approve: bool,
    pub can_cancel: bool,
}

/// Success banner shown when a job reaches COMPLETED
pub const COMPLETION_MESSAGE: &str = "리밸런싱이 성공적으로 완료되었습니다.";

/// The rebalancing screen's state machine
#[derive(Debug)]
pub struct RebalancingFlow {
    customer_id: CustomerId,
    state: FlowState,
    recommendation: Option<PortfolioRecommendation>,
    custom_weights: PortfolioWeights,
    last_error: Option<String>,
    generation: u64,
}

impl RebalancingFlow {
    /// Creates the flow in its initial state with the fixed default weights
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            state: FlowState::Idle,
            recommendation: None,
            custom_weights: PortfolioWeights::default_seed(),
            last_error: None,
            generation: 0,
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn recommendation(&self) -> Option<&PortfolioRecommendation> {
        self.recommendation.as_ref()
    }

    pub fn custom_weights(&self) -> PortfolioWeights {
        self.custom_weights
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The job currently displayed, if any
    pub fn job(&self) -> Option<&RebalancingJob> {
        match &self.state {
            FlowState::Reviewing { job } | FlowState::Approving { job } => Some(job),
            FlowState::Idle | FlowState::Simulating { .. } => None,
        }
    }

    /// Installs the fetched recommendation and seeds the weight inputs
    pub fn recommendation_loaded(&mut self, recommendation: PortfolioRecommendation) {
        self.custom_weights = recommendation.recommended_weights();
        self.recommendation = Some(recommendation);
    }

    /// Records a failed recommendation fetch; the fixed default weights stay
    pub fn recommendation_failed(&mut self) {
        self.recommendation = None;
    }

    /// Replaces the user-entered weights
    pub fn set_custom_weights(&mut self, weights: PortfolioWeights) {
        self.custom_weights = weights;
    }

    /// UI gate for the custom-simulation button
    pub fn can_simulate_custom(&self) -> bool {
        self.custom_weights.is_balanced() && !matches!(self.state, FlowState::Approving { .. })
    }

    /// Starts a simulation, superseding any in-flight or displayed one
    ///
    /// The previous result is cleared immediately so stale charts are never
    /// rendered while the new request is outstanding.
    pub fn begin_simulation(
        &mut self,
        kind: SimulationKind,
    ) -> Result<SimulationTicket, FlowError> {
        if matches!(self.state, FlowState::Approving { .. }) {
            return Err(FlowError::InvalidTransition(
                "cannot start a simulation while an approval is in flight",
            ));
        }

        if kind == SimulationKind::Custom && !self.custom_weights.is_balanced() {
            return Err(FlowError::WeightsOutOfBalance {
                total: self.custom_weights.total(),
            });
        }

        self.last_error = None;
        self.generation += 1;
        self.state = FlowState::Simulating { kind };

        Ok(SimulationTicket {
            generation: self.generation,
        })
    }

    /// Applies a simulation response
    ///
    /// Returns `true` when the response was installed; `false` when its
    /// ticket was superseded by a newer simulation and the response was
    /// discarded.
    pub fn apply_simulation(
        &mut self,
        ticket: SimulationTicket,
        job: RebalancingJob,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding superseded simulation response"
            );
            return false;
        }

        self.state = FlowState::Reviewing { job };
        true
    }

    /// Records a failed simulation; the screen returns to idle, retryable
    pub fn simulation_failed(&mut self, ticket: SimulationTicket, message: impl Into<String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.state = FlowState::Idle;
        self.last_error = Some(message.into());
        true
    }

    /// Which actions the displayed job currently allows
    pub fn available_actions(&self) -> FlowActions {
        match &self.state {
            FlowState::Reviewing { job } if job.can_be_approved() => FlowActions {
                can_approve: true,
                can_cancel: true,
            },
            _ => FlowActions::default(),
        }
    }

    /// Discards the displayed pending job; no server call is made
    pub fn cancel_review(&mut self) -> Result<(), FlowError> {
        match &self.state {
            FlowState::Reviewing { job } if job.can_be_approved() => {
                self.state = FlowState::Idle;
                Ok(())
            }
            _ => Err(FlowError::InvalidTransition(
                "only a pending simulation under review can be cancelled",
            )),
        }
    }

    /// Starts the approve call for the displayed pending job
    pub fn begin_approval(&mut self) -> Result<(), FlowError> {
        match std::mem::replace(&mut self.state, FlowState::Idle) {
            FlowState::Reviewing { job } if job.can_be_approved() => {
                self.last_error = None;
                self.state = FlowState::Approving { job };
                Ok(())
            }
            other => {
                self.state = other;
                Err(FlowError::InvalidTransition(
                    "only a pending simulation under review can be approved",
                ))
            }
        }
    }

    /// Installs the server's post-approval job state
    pub fn approval_succeeded(&mut self, job: RebalancingJob) -> Result<(), FlowError> {
        if !matches!(self.state, FlowState::Approving { .. }) {
            return Err(FlowError::InvalidTransition(
                "no approval is in flight",
            ));
        }
        self.state = FlowState::Reviewing { job };
        Ok(())
    }

    /// Records a failed approval; the prior pending job stays under review
    pub fn approval_failed(&mut self, message: impl Into<String>) -> Result<(), FlowError> {
        match std::mem::replace(&mut self.state, FlowState::Idle) {
            FlowState::Approving { job } => {
                self.state = FlowState::Reviewing { job };
                self.last_error = Some(message.into());
                Ok(())
            }
            other => {
                self.state = other;
                Err(FlowError::InvalidTransition("no approval is in flight"))
            }
        }
    }

    /// Success banner copy once the displayed job is completed
    pub fn success_message(&self) -> Option<&'static str> {
        match self.job() {
            Some(job) if job.status.is_completed() => Some(COMPLETION_MESSAGE),
            _ => None,
        }
    }
}
