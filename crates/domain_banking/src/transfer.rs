//! Pre-submit transfer checks
//!
//! The transfer form blocks submission client-side when the requested
//! amount exceeds the cached balance, showing a dedicated modal instead of
//! calling the backend. The formatted lines here are exactly what that
//! modal renders.

use thiserror::Error;

use core_kernel::Money;

/// Raised when a transfer request exceeds the available balance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("잔액 부족: 현재 잔액 {balance}, 송금 요청 금액 {requested}")]
pub struct TransferBlocked {
    pub balance: Money,
    pub requested: Money,
}

impl TransferBlocked {
    /// Modal title
    pub fn headline(&self) -> &'static str {
        "잔액 부족"
    }

    /// Modal lead sentence
    pub fn body(&self) -> &'static str {
        "송금하려는 금액이 현재 잔액보다 큽니다."
    }

    /// `현재 잔액: 100,000원`
    pub fn balance_line(&self) -> String {
        format!("현재 잔액: {}", self.balance)
    }

    /// `송금 요청 금액: 150,000원`
    pub fn requested_line(&self) -> String {
        format!("송금 요청 금액: {}", self.requested)
    }
}

/// Gates a transfer on the cached balance before any network call
///
/// Zero and negative requests are allowed through here; the form's own
/// required-amount validation handles those.
pub fn check_transfer_funds(balance: Money, requested: Money) -> Result<(), TransferBlocked> {
    if requested.amount() > balance.amount() {
        return Err(TransferBlocked { balance, requested });
    }
    Ok(())
}
