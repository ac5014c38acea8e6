//! Banking service client

use tracing::warn;

use core_kernel::{AccountId, CustomerId, TransactionId, UserId};
use domain_banking::{AccountOverview, AccountStatus, BankingAccount, IrpAccountSummary, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::dto::banking::{
    AccountVerificationResponse, CreateAccountRequest, DepositRequest, ExternalTransferRequest,
    TransactionHistoryPage, TransactionHistoryQuery, TransactionResponse, TransferRequest,
    TransferToIrpRequest, VerifyAccountRequest, WithdrawalRequest,
};
use crate::error::ApiError;
use crate::http::HttpClient;

/// Client for the banking endpoints
#[derive(Debug, Clone)]
pub struct BankingClient {
    http: HttpClient,
}

impl BankingClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Active accounts of one user
    pub async fn active_accounts(&self, user_id: UserId) -> Result<Vec<BankingAccount>, ApiError> {
        self.http
            .get(&format!("/banking/user/{}/active", user_id))
            .await
    }

    /// One account by id
    pub async fn account(&self, account_id: AccountId) -> Result<BankingAccount, ApiError> {
        self.http.get(&format!("/banking/{}", account_id)).await
    }

    /// Opens a new account
    pub async fn create_account(
        &self,
        request: &CreateAccountRequest,
    ) -> Result<BankingAccount, ApiError> {
        self.http.post("/banking", request).await
    }

    /// Renames an account and/or updates its description
    pub async fn update_account(
        &self,
        account_id: AccountId,
        account_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<BankingAccount, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            account_name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }

        self.http
            .put_query(
                &format!("/banking/{}", account_id),
                &Params {
                    account_name,
                    description,
                },
            )
            .await
    }

    /// Changes an account's lifecycle status
    pub async fn update_account_status(
        &self,
        account_id: AccountId,
        status: AccountStatus,
    ) -> Result<BankingAccount, ApiError> {
        #[derive(Serialize)]
        struct Params {
            status: AccountStatus,
        }

        self.http
            .put_query(&format!("/banking/{}/status", account_id), &Params { status })
            .await
    }

    /// Current balance of one account
    pub async fn balance(&self, account_id: AccountId) -> Result<Decimal, ApiError> {
        self.http
            .get(&format!("/banking/{}/balance", account_id))
            .await
    }

    /// The IRP account view from the product service
    pub async fn irp_account(
        &self,
        customer_id: CustomerId,
    ) -> Result<IrpAccountSummary, ApiError> {
        self.http
            .get(&format!(
                "/v1/irp-integration/accounts/customer/{}",
                customer_id
            ))
            .await
    }

    /// The combined banking + IRP overview
    ///
    /// Banking accounts are required; the IRP fetch degrades gracefully:
    /// a failure there yields a banking-only overview rather than an error.
    pub async fn all_accounts(&self, user_id: UserId) -> Result<AccountOverview, ApiError> {
        let accounts = self.active_accounts(user_id).await?;

        let irp_account = match self.irp_account(CustomerId::new(user_id.value())).await {
            Ok(summary) => Some(summary),
            Err(err) => {
                warn!(%user_id, error = %err, "IRP account fetch failed; overview degrades to banking only");
                None
            }
        };

        Ok(AccountOverview::assemble(accounts, irp_account))
    }

    /// Records a cash deposit
    pub async fn deposit(&self, request: &DepositRequest) -> Result<TransactionResponse, ApiError> {
        self.http.post("/banking/transactions/deposit", request).await
    }

    /// Records a cash withdrawal
    pub async fn withdraw(
        &self,
        request: &WithdrawalRequest,
    ) -> Result<TransactionResponse, ApiError> {
        self.http
            .post("/banking/transactions/withdrawal", request)
            .await
    }

    /// Transfers between the user's own accounts
    pub async fn transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<TransactionResponse, ApiError> {
        self.http
            .post("/banking/transactions/transfer", request)
            .await
    }

    /// Transfers into the customer's IRP account
    pub async fn transfer_to_irp(
        &self,
        request: &TransferToIrpRequest,
    ) -> Result<TransactionResponse, ApiError> {
        self.http
            .post("/banking/transactions/transfer-to-irp", request)
            .await
    }

    /// Transfers to an account at another bank
    pub async fn external_transfer(
        &self,
        request: &ExternalTransferRequest,
    ) -> Result<TransactionResponse, ApiError> {
        self.http
            .post("/banking/transactions/external-transfer", request)
            .await
    }

    /// Checks whether an external account number exists
    pub async fn verify_external_account(
        &self,
        request: &VerifyAccountRequest,
    ) -> Result<AccountVerificationResponse, ApiError> {
        self.http
            .post("/banking/transactions/verify-account", request)
            .await
    }

    /// One page of transaction history
    pub async fn transaction_history(
        &self,
        query: &TransactionHistoryQuery,
    ) -> Result<TransactionHistoryPage, ApiError> {
        self.http
            .get_query("/banking/transactions/history", query)
            .await
    }

    /// One transaction by id
    pub async fn transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, ApiError> {
        self.http
            .get(&format!("/banking/transactions/{}", transaction_id))
            .await
    }

    /// One transaction by its human-facing number
    pub async fn transaction_by_number(
        &self,
        transaction_number: &str,
    ) -> Result<Transaction, ApiError> {
        self.http
            .get(&format!(
                "/banking/transactions/number/{}",
                transaction_number
            ))
            .await
    }
}
