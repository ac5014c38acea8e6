//! Banking account models
//!
//! Accounts arrive from the banking service with numeric type codes and
//! SCREAMING_SNAKE status strings. Type codes map through a closed enum
//! that rejects unknown values instead of defaulting to a catch-all label.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use core_kernel::{AccountId, AccountNumber, Money, UserId, WireDateTime};

use crate::error::BankingError;

/// Account product kinds with their backend wire codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// 입출금통장
    Checking,
    /// 저축예금
    Savings,
    /// 정기예금
    TimeDeposit,
    /// 정기적금
    FixedDeposit,
    /// 대출계좌
    Loan,
    /// IRP 계좌
    Irp,
}

impl AccountKind {
    /// Maps a backend numeric code to a kind
    ///
    /// Unknown codes are an error; nothing silently becomes "기타".
    pub fn from_code(code: i32) -> Result<Self, BankingError> {
        match code {
            1 => Ok(AccountKind::Checking),
            2 => Ok(AccountKind::Savings),
            3 => Ok(AccountKind::TimeDeposit),
            4 => Ok(AccountKind::FixedDeposit),
            5 => Ok(AccountKind::Loan),
            6 => Ok(AccountKind::Irp),
            other => Err(BankingError::UnknownAccountKind(other)),
        }
    }

    /// Returns the backend wire code
    pub fn code(&self) -> i32 {
        match self {
            AccountKind::Checking => 1,
            AccountKind::Savings => 2,
            AccountKind::TimeDeposit => 3,
            AccountKind::FixedDeposit => 4,
            AccountKind::Loan => 5,
            AccountKind::Irp => 6,
        }
    }

    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Checking => "입출금통장",
            AccountKind::Savings => "저축예금",
            AccountKind::TimeDeposit => "정기예금",
            AccountKind::FixedDeposit => "정기적금",
            AccountKind::Loan => "대출계좌",
            AccountKind::Irp => "IRP 계좌",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for AccountKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for AccountKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        AccountKind::from_code(code).map_err(D::Error::custom)
    }
}

/// Account lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
    Closed,
    Frozen,
}

impl AccountStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

/// A banking account as returned by the banking service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankingAccount {
    pub account_id: AccountId,
    pub user_id: UserId,
    pub account_number: AccountNumber,
    pub account_name: String,
    #[serde(rename = "accountType")]
    pub kind: AccountKind,
    pub account_status: AccountStatus,
    pub balance: Decimal,
    pub currency_code: String,
    #[serde(default)]
    pub opened_date: Option<WireDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<WireDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_balance: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<WireDateTime>,
    #[serde(default)]
    pub updated_at: Option<WireDateTime>,
}

impl BankingAccount {
    /// The balance as a won amount for display
    pub fn balance_money(&self) -> Money {
        Money::won_decimal(self.balance)
    }

    /// True when this row is the customer's IRP account in banking clothing
    ///
    /// The banking service returns the IRP account alongside ordinary
    /// accounts; the overview keeps them separate.
    pub fn is_irp(&self, irp_account_number: Option<&AccountNumber>) -> bool {
        self.kind == AccountKind::Irp
            && (self.account_name.contains("IRP")
                || self
                    .description
                    .as_deref()
                    .map(|d| d.contains("IRP"))
                    .unwrap_or(false)
                || irp_account_number
                    .map(|n| n.normalized() == self.account_number.normalized())
                    .unwrap_or(false))
    }
}

/// The IRP account view from the product service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrpAccountSummary {
    pub account_number: AccountNumber,
    pub current_balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_contribution: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_date: Option<WireDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<WireDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_deposit: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_deposit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_main_account: Option<AccountNumber>,
}

/// The combined banking + IRP view shown on the account screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverview {
    pub banking_accounts: Vec<BankingAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irp_account: Option<IrpAccountSummary>,
    pub total_banking_balance: Decimal,
    pub total_irp_balance: Decimal,
    pub total_balance: Decimal,
}

impl AccountOverview {
    /// Assembles the overview from the two upstream fetches
    ///
    /// IRP rows returned by the banking service are excluded from the
    /// banking list (and its total) so the IRP balance is not counted twice.
    pub fn assemble(
        accounts: Vec<BankingAccount>,
        irp_account: Option<IrpAccountSummary>,
    ) -> Self {
        let irp_number = irp_account.as_ref().map(|irp| irp.account_number.clone());

        let banking_accounts: Vec<BankingAccount> = accounts
            .into_iter()
            .filter(|account| !account.is_irp(irp_number.as_ref()))
            .collect();

        let total_banking_balance: Decimal =
            banking_accounts.iter().map(|a| a.balance).sum();
        let total_irp_balance = irp_account
            .as_ref()
            .map(|irp| irp.current_balance)
            .unwrap_or_default();

        Self {
            banking_accounts,
            irp_account,
            total_banking_balance,
            total_irp_balance,
            total_balance: total_banking_balance + total_irp_balance,
        }
    }

    pub fn has_irp_account(&self) -> bool {
        self.irp_account.is_some()
    }
}
