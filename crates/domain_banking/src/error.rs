//! Banking domain error types

use thiserror::Error;

/// Errors raised by banking domain operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankingError {
    #[error("Unknown account kind code: {0}")]
    UnknownAccountKind(i32),

    #[error("Account not found: {0}")]
    AccountNotFound(i64),
}
