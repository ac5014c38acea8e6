//! Portfolio domain error types

use thiserror::Error;

/// Errors raised by portfolio domain operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Invalid target weights: {0}")]
    InvalidWeights(String),

    #[error("Unknown job status: {0}")]
    UnknownJobStatus(String),
}
