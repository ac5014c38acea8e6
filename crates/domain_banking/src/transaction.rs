//! Transaction history models and client-side filtering
//!
//! The history endpoint does coarse filtering server-side; the view applies
//! a second pass (direction by sign, keyword over description/memo) and
//! renders the active filter caption.

use chrono::{Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, AccountNumber, Money, TransactionId, WireDateTime};

/// Transaction kinds on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    AutoTransfer,
    Interest,
    Fee,
    Refund,
    Reversal,
}

/// Spending/income category assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionCategory {
    Salary,
    Pension,
    Savings,
    Investment,
    Loan,
    Insurance,
    Utility,
    Shopping,
    Food,
    Transport,
    Medical,
    Education,
    Entertainment,
    Other,
}

/// Which side of the account the amount moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionDirection {
    Credit,
    Debit,
}

/// Processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Cancelled,
    Reversed,
}

impl TransactionStatus {
    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "대기",
            TransactionStatus::Processing => "처리중",
            TransactionStatus::Completed => "완료",
            TransactionStatus::Failed => "실패",
            TransactionStatus::Cancelled => "취소",
            TransactionStatus::Reversed => "역처리",
        }
    }
}

/// A transaction row from the history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub transaction_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_account_id: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_account_number: Option<AccountNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_number: Option<AccountNumber>,
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_category: Option<TransactionCategory>,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_after: Option<Decimal>,
    pub transaction_direction: TransactionDirection,
    #[serde(default)]
    pub description: Option<String>,
    pub transaction_status: TransactionStatus,
    pub transaction_date: WireDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_date: Option<WireDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}

impl Transaction {
    /// Signed amount as won for display
    pub fn amount_money(&self) -> Money {
        Money::won_decimal(self.amount)
    }

    /// Grouped absolute amount the list rows render
    pub fn amount_display(&self) -> String {
        Money::won_decimal(self.amount.abs()).to_string()
    }
}

/// The view's transaction-type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Deposit,
    Withdrawal,
    Keyword,
}

impl TypeFilter {
    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "전체조회",
            TypeFilter::Deposit => "입금",
            TypeFilter::Withdrawal => "출금",
            TypeFilter::Keyword => "키워드검색",
        }
    }

    /// The server-side type parameter this filter maps to, if any
    pub fn wire_type(&self) -> Option<TransactionType> {
        match self {
            TypeFilter::Deposit => Some(TransactionType::Deposit),
            TypeFilter::Withdrawal => Some(TransactionType::Withdrawal),
            TypeFilter::All | TypeFilter::Keyword => None,
        }
    }
}

/// List ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Desc => "최신순",
            SortOrder::Asc => "오래된순",
        }
    }
}

/// History look-back period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    OneWeek,
    OneMonth,
    #[default]
    ThreeMonths,
    OneYear,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::OneWeek => "1주",
            Period::OneMonth => "1개월",
            Period::ThreeMonths => "3개월",
            Period::OneYear => "1년",
        }
    }

    /// Start date of the period, counting back from `today`
    pub fn start_date(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Period::OneWeek => today - Days::new(7),
            Period::OneMonth => today - Months::new(1),
            Period::ThreeMonths => today - Months::new(3),
            Period::OneYear => today - Months::new(12),
        }
    }
}

/// The combined filter state of the history view
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub type_filter: TypeFilter,
    pub sort_order: SortOrder,
    pub period: Period,
    pub keyword: String,
}

impl TransactionFilter {
    /// Inclusive date range for the history request
    pub fn date_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (self.period.start_date(today), today)
    }

    /// Applies the client-side second pass over fetched rows
    ///
    /// The deposit filter also admits positive amounts (and withdrawal
    /// negative amounts) because legacy rows carry only the sign; the
    /// keyword filter searches description and memo case-insensitively.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut rows: Vec<Transaction> = transactions
            .iter()
            .filter(|tx| match self.type_filter {
                TypeFilter::All => true,
                TypeFilter::Deposit => {
                    tx.transaction_type == TransactionType::Deposit || tx.amount > Decimal::ZERO
                }
                TypeFilter::Withdrawal => {
                    tx.transaction_type == TransactionType::Withdrawal
                        || tx.amount < Decimal::ZERO
                }
                TypeFilter::Keyword => {
                    let keyword = self.keyword.trim().to_lowercase();
                    if keyword.is_empty() {
                        return true;
                    }
                    let matches = |field: &Option<String>| {
                        field
                            .as_deref()
                            .map(|v| v.to_lowercase().contains(&keyword))
                            .unwrap_or(false)
                    };
                    matches(&tx.description) || matches(&tx.memo)
                }
            })
            .cloned()
            .collect();

        match self.sort_order {
            SortOrder::Desc => rows.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date)),
            SortOrder::Asc => rows.sort_by(|a, b| a.transaction_date.cmp(&b.transaction_date)),
        }

        rows
    }

    /// The caption summarizing the active filter, e.g. `전체조회 / 최신순 / 3개월`
    pub fn summary(&self) -> String {
        let base = format!(
            "{} / {} / {}",
            self.type_filter.label(),
            self.sort_order.label(),
            self.period.label()
        );

        if self.type_filter == TypeFilter::Keyword && !self.keyword.trim().is_empty() {
            format!("{} ({})", base, self.keyword.trim())
        } else {
            base
        }
    }
}
