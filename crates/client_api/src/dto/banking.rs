//! Banking service request/response envelopes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{AccountId, AccountNumber, UserId};
use domain_banking::{
    AccountKind, SortOrder, Transaction, TransactionCategory, TransactionType,
};

/// Interest payout handling for deposit products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterestPaymentMethod {
    Auto,
    Manual,
}

/// Opens a new banking account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub user_id: UserId,
    #[serde(rename = "accountType")]
    pub kind: AccountKind,
    pub account_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_deposit_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_period: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_payment_method: Option<InterestPaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_password: Option<String>,
}

impl CreateAccountRequest {
    pub fn new(user_id: UserId, kind: AccountKind, account_name: impl Into<String>) -> Self {
        Self {
            user_id,
            kind,
            account_name: account_name.into(),
            initial_balance: None,
            description: None,
            purpose: None,
            monthly_deposit_amount: None,
            deposit_period: None,
            interest_payment_method: None,
            account_password: None,
        }
    }
}

/// Cash into one account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub account_id: AccountId,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

/// Cash out of one account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub account_id: AccountId,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

/// Transfer between own accounts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

impl TransferRequest {
    /// Attaches a fresh client-side reference number
    pub fn with_generated_reference(mut self) -> Self {
        self.reference_number = Some(Uuid::new_v4().simple().to_string());
        self
    }
}

/// Transfer into the customer's IRP account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferToIrpRequest {
    pub from_account_id: AccountId,
    pub to_irp_account_number: AccountNumber,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Transfer to an account at another bank
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalTransferRequest {
    pub from_account_id: AccountId,
    pub to_account_number: AccountNumber,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Asks whether an external account number exists
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAccountRequest {
    pub account_number: AccountNumber,
}

/// Result of an external account check
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountVerificationResponse {
    pub exists: bool,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub account_status: Option<String>,
    #[serde(default)]
    pub account_number: Option<AccountNumber>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a deposit/withdrawal/transfer call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub transaction_number: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub balance_after: Option<Decimal>,
    #[serde(default)]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub transaction_status: Option<String>,
    #[serde(default)]
    pub failure_reason: Option<String>,
}

/// Query parameters for the history endpoint
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<AccountNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_category: Option<TransactionCategory>,
    /// yyyy-MM-dd
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortOrder>,
}

/// One page of transaction history
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryPage {
    #[serde(default)]
    pub content: Vec<Transaction>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
    pub first: bool,
    pub last: bool,
}
