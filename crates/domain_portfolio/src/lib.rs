//! IRP rebalancing domain
//!
//! The client side of the rebalancing feature: target-weight inputs and
//! their sum gate, simulation jobs as the server reports them, the advisory
//! risk evaluation, chart-ready series shaping, and the review flow state
//! machine that decides which actions are available at any moment.
//!
//! All portfolio computation (target weights, order generation, fees) is
//! server-side; this crate only submits parameters and reflects responses.

pub mod chart;
pub mod error;
pub mod flow;
pub mod job;
pub mod order;
pub mod ports;
pub mod recommendation;
pub mod risk;
pub mod session;
pub mod snapshot;
pub mod weights;

pub use chart::{allocation_slices, AllocationSlice, OrderFlowBar, OrderFlowSummary};
pub use error::PortfolioError;
pub use flow::{FlowActions, FlowError, FlowState, RebalancingFlow, SimulationKind, SimulationTicket};
pub use job::{JobStatus, RebalancingJob, TriggerType};
pub use order::{OrderType, RebalancingOrder};
pub use ports::{PortError, RebalancingPort};
pub use recommendation::{
    PortfolioMix, PortfolioRecommendation, RecommendationMetadata, RiskProfileType,
    SimilarUserMix,
};
pub use risk::{evaluate_risk, RiskAssessment, RiskLevel};
pub use session::{RebalancingSession, SessionError};
pub use snapshot::{AssetType, IrpHolding, IrpPortfolio, PortfolioSnapshot};
pub use weights::PortfolioWeights;
