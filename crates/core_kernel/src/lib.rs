//! Core Kernel - Foundational types and utilities for the banking client
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and Korean display formatting
//! - Temporal types for the backend's mixed wire date formats
//! - Strongly-typed identifiers matching the backend's numeric ids

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{WireDateTime, TemporalError, now_kst, today_kst};
pub use identifiers::{
    UserId, CustomerId, AccountId, TransactionId, JobId, AccountNumber,
};
pub use error::CoreError;
