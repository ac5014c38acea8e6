//! Banking domain
//!
//! Models the customer's banking surface: accounts and their wire codes,
//! the bank-prefix directory, transaction history filtering, the pre-submit
//! transfer funds check, and the process-wide account store.

pub mod account;
pub mod directory;
pub mod error;
pub mod store;
pub mod transaction;
pub mod transfer;

pub use account::{
    AccountKind, AccountOverview, AccountStatus, BankingAccount, IrpAccountSummary,
};
pub use directory::{bank_by_code, bank_by_name, bank_by_prefix, bank_for_account_number, BankPattern};
pub use error::BankingError;
pub use store::{AccountStore, SharedAccountStore};
pub use transaction::{
    Period, SortOrder, Transaction, TransactionCategory, TransactionDirection, TransactionFilter,
    TransactionStatus, TransactionType, TypeFilter,
};
pub use transfer::{check_transfer_funds, TransferBlocked};
