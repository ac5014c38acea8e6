//! Rebalancing simulation jobs
//!
//! A simulate call creates a job in PENDING status; only an explicit
//! approve call moves it on. The client never transitions status locally;
//! it always replaces its copy with the server's latest response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{AccountNumber, CustomerId, JobId, WireDateTime};

use crate::error::PortfolioError;
use crate::order::RebalancingOrder;
use crate::snapshot::PortfolioSnapshot;

/// Why a simulation was initiated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    Manual,
    TimeBased,
    BandBased,
}

impl TriggerType {
    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            TriggerType::Manual => "수동",
            TriggerType::TimeBased => "시간기반",
            TriggerType::BandBased => "밴드기반",
        }
    }
}

/// Server-side job lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Approved,
    Executing,
    Completed,
    Cancelled,
    Failed,
}

impl JobStatus {
    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Pending => "대기",
            JobStatus::Approved => "승인",
            JobStatus::Executing => "실행중",
            JobStatus::Completed => "완료",
            JobStatus::Cancelled => "취소",
            JobStatus::Failed => "실패",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, JobStatus::Pending)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, JobStatus::Completed)
    }

    /// Any non-pending status disables further client action on the job
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wire = match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Approved => "APPROVED",
            JobStatus::Executing => "EXECUTING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Cancelled => "CANCELLED",
            JobStatus::Failed => "FAILED",
        };
        write!(f, "{}", wire)
    }
}

impl FromStr for JobStatus {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(JobStatus::Pending),
            "APPROVED" => Ok(JobStatus::Approved),
            "EXECUTING" => Ok(JobStatus::Executing),
            "COMPLETED" => Ok(JobStatus::Completed),
            "CANCELLED" => Ok(JobStatus::Cancelled),
            "FAILED" => Ok(JobStatus::Failed),
            other => Err(PortfolioError::UnknownJobStatus(other.to_string())),
        }
    }
}

/// A rebalancing job as the simulate/approve/status endpoints report it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancingJob {
    pub job_id: JobId,
    pub customer_id: CustomerId,
    pub irp_account_number: AccountNumber,
    pub trigger_type: TriggerType,
    pub status: JobStatus,
    pub current_portfolio: PortfolioSnapshot,
    pub target_portfolio: PortfolioSnapshot,
    pub expected_portfolio: PortfolioSnapshot,
    #[serde(default)]
    pub orders: Vec<RebalancingOrder>,
    pub total_fee: Decimal,
    pub total_order_amount: Decimal,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<WireDateTime>,
}

impl RebalancingJob {
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Only pending simulation jobs accept an approve call
    pub fn can_be_approved(&self) -> bool {
        self.status.is_pending()
    }
}
