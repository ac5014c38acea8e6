//! Test data builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{AccountId, AccountNumber, CustomerId, JobId, UserId};
use domain_banking::{AccountKind, AccountStatus, BankingAccount};
use domain_insurance::ApplicationDraft;
use domain_portfolio::{
    AssetType, JobStatus, OrderType, PortfolioSnapshot, RebalancingJob, RebalancingOrder,
    TriggerType,
};

use crate::fixtures::TemporalFixtures;

/// Builder for banking accounts
pub struct AccountBuilder {
    account_id: AccountId,
    user_id: UserId,
    account_number: AccountNumber,
    account_name: String,
    kind: AccountKind,
    status: AccountStatus,
    balance: Decimal,
}

impl Default for AccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountBuilder {
    pub fn new() -> Self {
        Self {
            account_id: AccountId::new(1),
            user_id: UserId::new(1001),
            account_number: AccountNumber::new("110-12-345678"),
            account_name: "주거래 통장".to_string(),
            kind: AccountKind::Checking,
            status: AccountStatus::Active,
            balance: dec!(100000),
        }
    }

    pub fn with_account_id(mut self, id: i64) -> Self {
        self.account_id = AccountId::new(id);
        self
    }

    pub fn with_account_number(mut self, number: impl Into<String>) -> Self {
        self.account_number = AccountNumber::new(number);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.account_name = name.into();
        self
    }

    pub fn with_kind(mut self, kind: AccountKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    pub fn build(self) -> BankingAccount {
        BankingAccount {
            account_id: self.account_id,
            user_id: self.user_id,
            account_number: self.account_number,
            account_name: self.account_name,
            kind: self.kind,
            account_status: self.status,
            balance: self.balance,
            currency_code: "KRW".to_string(),
            opened_date: None,
            expiry_date: None,
            interest_rate: None,
            minimum_balance: None,
            description: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Builder for portfolio snapshots
pub struct SnapshotBuilder {
    total_value: Decimal,
    cash_weight: Decimal,
    deposit_weight: Decimal,
    fund_weight: Decimal,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            total_value: dec!(10000000),
            cash_weight: dec!(10),
            deposit_weight: dec!(40),
            fund_weight: dec!(50),
        }
    }

    pub fn with_total_value(mut self, total_value: Decimal) -> Self {
        self.total_value = total_value;
        self
    }

    pub fn with_weights(mut self, cash: Decimal, deposit: Decimal, fund: Decimal) -> Self {
        self.cash_weight = cash;
        self.deposit_weight = deposit;
        self.fund_weight = fund;
        self
    }

    /// Amounts derive from the weights over the total value
    pub fn build(self) -> PortfolioSnapshot {
        let amount = |weight: Decimal| (self.total_value * weight / dec!(100)).round_dp(0);
        PortfolioSnapshot {
            total_value: self.total_value,
            cash_weight: self.cash_weight,
            deposit_weight: self.deposit_weight,
            fund_weight: self.fund_weight,
            cash_amount: amount(self.cash_weight),
            deposit_amount: amount(self.deposit_weight),
            fund_amount: amount(self.fund_weight),
        }
    }
}

/// Builder for rebalancing orders
pub struct OrderBuilder {
    order_type: OrderType,
    fund_code: String,
    fund_name: String,
    order_amount: Decimal,
    expected_nav: Decimal,
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self {
            order_type: OrderType::Buy,
            fund_code: "FUND-001".to_string(),
            fund_name: "글로벌 주식형 펀드".to_string(),
            order_amount: dec!(500000),
            expected_nav: dec!(12125.50),
        }
    }

    pub fn sell(mut self) -> Self {
        self.order_type = OrderType::Sell;
        self
    }

    pub fn with_fund(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.fund_code = code.into();
        self.fund_name = name.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.order_amount = amount;
        self
    }

    /// Units and the 0.15% fee derive from the amount and NAV
    pub fn build(self) -> RebalancingOrder {
        let reason = match self.order_type {
            OrderType::Buy => "펀드 비중 부족으로 매수 필요",
            OrderType::Sell => "펀드 비중 초과로 매도 필요",
        };
        RebalancingOrder {
            order_type: self.order_type,
            asset_type: AssetType::Fund,
            fund_code: self.fund_code,
            fund_name: self.fund_name,
            order_amount: self.order_amount,
            expected_nav: self.expected_nav,
            order_units: (self.order_amount / self.expected_nav).round_dp(2),
            fee: (self.order_amount * dec!(0.0015)).round_dp(0),
            reason: reason.to_string(),
        }
    }
}

/// Builder for rebalancing jobs
pub struct JobBuilder {
    job_id: JobId,
    customer_id: CustomerId,
    status: JobStatus,
    trigger_type: TriggerType,
    orders: Vec<RebalancingOrder>,
}

impl Default for JobBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JobBuilder {
    pub fn new() -> Self {
        Self {
            job_id: JobId::new(1),
            customer_id: CustomerId::new(1001),
            status: JobStatus::Pending,
            trigger_type: TriggerType::Manual,
            orders: vec![OrderBuilder::new().build()],
        }
    }

    pub fn with_job_id(mut self, id: i64) -> Self {
        self.job_id = JobId::new(id);
        self
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_trigger(mut self, trigger_type: TriggerType) -> Self {
        self.trigger_type = trigger_type;
        self
    }

    pub fn with_orders(mut self, orders: Vec<RebalancingOrder>) -> Self {
        self.orders = orders;
        self
    }

    pub fn build(self) -> RebalancingJob {
        let total_fee: Decimal = self.orders.iter().map(|o| o.fee).sum();
        let total_order_amount: Decimal = self.orders.iter().map(|o| o.order_amount).sum();

        RebalancingJob {
            job_id: self.job_id,
            customer_id: self.customer_id,
            irp_account_number: AccountNumber::new("110-90-000001"),
            trigger_type: self.trigger_type,
            status: self.status,
            current_portfolio: SnapshotBuilder::new()
                .with_weights(dec!(20), dec!(50), dec!(30))
                .build(),
            target_portfolio: SnapshotBuilder::new().build(),
            expected_portfolio: SnapshotBuilder::new().build(),
            orders: self.orders,
            total_fee,
            total_order_amount,
            message: None,
            created_at: Some(TemporalFixtures::simulation_time()),
        }
    }
}

/// Builder for insurance application drafts
pub struct DraftBuilder {
    draft: ApplicationDraft,
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self {
            draft: ApplicationDraft::new(),
        }
    }

    pub fn with_applicant(mut self) -> Self {
        self.draft
            .set_applicant_info(crate::fixtures::PersonFixtures::applicant());
        self
    }

    pub fn build(self) -> ApplicationDraft {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_builder_defaults() {
        let account = AccountBuilder::new().build();
        assert_eq!(account.kind, AccountKind::Checking);
        assert_eq!(account.balance_money().to_string(), "100,000원");
    }

    #[test]
    fn test_snapshot_builder_derives_amounts() {
        let snapshot = SnapshotBuilder::new()
            .with_total_value(dec!(1000000))
            .with_weights(dec!(10), dec!(40), dec!(50))
            .build();
        assert_eq!(snapshot.cash_amount, dec!(100000));
        assert_eq!(snapshot.fund_amount, dec!(500000));
    }

    #[test]
    fn test_order_builder_derives_units_and_fee() {
        let order = OrderBuilder::new().with_amount(dec!(1000000)).build();
        assert_eq!(order.fee, dec!(1500));
        assert!(order.order_units > dec!(0));
    }

    #[test]
    fn test_job_builder_totals_match_orders() {
        let job = JobBuilder::new()
            .with_orders(vec![
                OrderBuilder::new().with_amount(dec!(300000)).build(),
                OrderBuilder::new().sell().with_amount(dec!(200000)).build(),
            ])
            .build();

        assert_eq!(job.total_order_amount, dec!(500000));
        assert_eq!(job.total_fee, dec!(450) + dec!(300));
        assert!(job.can_be_approved());
    }

    #[test]
    fn test_draft_builder() {
        let draft = DraftBuilder::new().with_applicant().build();
        assert!(draft.applicant_info.is_some());
        assert!(draft.product_id.is_none());
    }
}
