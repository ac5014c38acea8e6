//! Process-wide account state
//!
//! One mutable container holds the fetched account list, the current
//! selection, and the last full accounts overview. Writers go through
//! setter methods so derived state (`has_irp_account`) can never drift
//! from the overview that produced it. Nothing here persists; the store
//! must be cleared on logout or view teardown.

use std::sync::{Arc, RwLock};

use core_kernel::AccountId;

use crate::account::{AccountOverview, BankingAccount};
use crate::error::BankingError;

/// Handle for sharing the store across tasks
pub type SharedAccountStore = Arc<RwLock<AccountStore>>;

/// The process-wide account cache
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: Vec<BankingAccount>,
    selected_account_id: Option<AccountId>,
    all_accounts: Option<AccountOverview>,
    has_irp_account: bool,
    is_loading: bool,
    error: Option<String>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store wrapped for sharing
    pub fn shared() -> SharedAccountStore {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn accounts(&self) -> &[BankingAccount] {
        &self.accounts
    }

    pub fn selected_account_id(&self) -> Option<AccountId> {
        self.selected_account_id
    }

    pub fn selected_account(&self) -> Option<&BankingAccount> {
        let id = self.selected_account_id?;
        self.accounts.iter().find(|a| a.account_id == id)
    }

    pub fn all_accounts(&self) -> Option<&AccountOverview> {
        self.all_accounts.as_ref()
    }

    pub fn has_irp_account(&self) -> bool {
        self.has_irp_account
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the account list; a successful write clears any error
    pub fn set_accounts(&mut self, accounts: Vec<BankingAccount>) {
        self.accounts = accounts;
        self.error = None;
    }

    /// Appends a freshly created account
    pub fn add_account(&mut self, account: BankingAccount) {
        self.accounts.push(account);
        self.error = None;
    }

    /// Applies a partial update to one held account
    pub fn update_account(
        &mut self,
        account_id: AccountId,
        update: impl FnOnce(&mut BankingAccount),
    ) -> Result<(), BankingError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.account_id == account_id)
            .ok_or(BankingError::AccountNotFound(account_id.value()))?;
        update(account);
        self.error = None;
        Ok(())
    }

    /// Removes an account; a selection pointing at it is cleared
    pub fn remove_account(&mut self, account_id: AccountId) {
        self.accounts.retain(|a| a.account_id != account_id);
        if self.selected_account_id == Some(account_id) {
            self.selected_account_id = None;
        }
    }

    pub fn set_selected_account(&mut self, account_id: Option<AccountId>) {
        self.selected_account_id = account_id;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Installs a full accounts overview
    ///
    /// This is the only entry point that touches `has_irp_account`: the
    /// account list, the overview, and the derived flag are set together
    /// and the error state cleared. Callers must not assume deep merges;
    /// the previous overview is replaced wholesale.
    pub fn set_all_accounts_data(&mut self, overview: AccountOverview) {
        self.accounts = overview.banking_accounts.clone();
        self.has_irp_account = overview.has_irp_account();
        self.all_accounts = Some(overview);
        self.error = None;
    }

    /// Resets the account list and selection (logout / view teardown)
    pub fn clear_accounts(&mut self) {
        self.accounts.clear();
        self.selected_account_id = None;
        self.error = None;
    }

    /// Resets everything, including the overview and derived flag
    pub fn clear_all_accounts_data(&mut self) {
        self.accounts.clear();
        self.selected_account_id = None;
        self.all_accounts = None;
        self.has_irp_account = false;
        self.is_loading = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountKind, AccountStatus, IrpAccountSummary};
    use core_kernel::{AccountNumber, UserId};
    use rust_decimal_macros::dec;

    fn account(id: i64) -> BankingAccount {
        BankingAccount {
            account_id: AccountId::new(id),
            user_id: UserId::new(1),
            account_number: AccountNumber::new(format!("110-00-{:06}", id)),
            account_name: format!("통장 {}", id),
            kind: AccountKind::Checking,
            account_status: AccountStatus::Active,
            balance: dec!(10000),
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

    fn irp_summary() -> IrpAccountSummary {
        IrpAccountSummary {
            account_number: AccountNumber::new("110-90-000001"),
            current_balance: dec!(500000),
            account_name: None,
            total_contribution: None,
            return_rate: None,
            investment_style: None,
            open_date: None,
            maturity_date: None,
            monthly_deposit: None,
            is_auto_deposit: None,
            deposit_day: None,
            linked_main_account: None,
        }
    }

    #[test]
    fn test_set_accounts_clears_error() {
        let mut store = AccountStore::new();
        store.set_error(Some("이전 오류".to_string()));
        store.set_accounts(vec![account(1)]);

        assert_eq!(store.accounts().len(), 1);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_update_account_applies_partial_change() {
        let mut store = AccountStore::new();
        store.set_accounts(vec![account(1)]);

        store
            .update_account(AccountId::new(1), |a| a.balance = dec!(99999))
            .unwrap();
        assert_eq!(store.accounts()[0].balance, dec!(99999));
    }

    #[test]
    fn test_update_unknown_account_is_an_error() {
        let mut store = AccountStore::new();
        let result = store.update_account(AccountId::new(404), |_| {});
        assert_eq!(result, Err(BankingError::AccountNotFound(404)));
    }

    #[test]
    fn test_remove_selected_account_clears_selection() {
        let mut store = AccountStore::new();
        store.set_accounts(vec![account(1), account(2)]);
        store.set_selected_account(Some(AccountId::new(2)));

        store.remove_account(AccountId::new(2));

        assert_eq!(store.accounts().len(), 1);
        assert!(store.selected_account_id().is_none());
    }

    #[test]
    fn test_remove_other_account_keeps_selection() {
        let mut store = AccountStore::new();
        store.set_accounts(vec![account(1), account(2)]);
        store.set_selected_account(Some(AccountId::new(2)));

        store.remove_account(AccountId::new(1));

        assert_eq!(store.selected_account_id(), Some(AccountId::new(2)));
    }

    #[test]
    fn test_set_all_accounts_data_is_atomic() {
        let mut store = AccountStore::new();
        store.set_error(Some("실패".to_string()));

        let overview = AccountOverview::assemble(vec![account(1)], Some(irp_summary()));
        store.set_all_accounts_data(overview);

        assert_eq!(store.accounts().len(), 1);
        assert!(store.has_irp_account());
        assert!(store.all_accounts().is_some());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_overview_without_irp_clears_derived_flag() {
        let mut store = AccountStore::new();
        store.set_all_accounts_data(AccountOverview::assemble(
            vec![account(1)],
            Some(irp_summary()),
        ));
        assert!(store.has_irp_account());

        store.set_all_accounts_data(AccountOverview::assemble(vec![account(1)], None));
        assert!(!store.has_irp_account());
    }

    #[test]
    fn test_clear_all_accounts_data_resets_everything() {
        let mut store = AccountStore::new();
        store.set_all_accounts_data(AccountOverview::assemble(
            vec![account(1)],
            Some(irp_summary()),
        ));
        store.set_selected_account(Some(AccountId::new(1)));
        store.set_loading(true);

        store.clear_all_accounts_data();

        assert!(store.accounts().is_empty());
        assert!(store.selected_account_id().is_none());
        assert!(store.all_accounts().is_none());
        assert!(!store.has_irp_account());
        assert!(!store.is_loading());
    }

    #[test]
    fn test_selected_account_lookup() {
        let mut store = AccountStore::new();
        store.set_accounts(vec![account(1), account(2)]);
        store.set_selected_account(Some(AccountId::new(2)));

        assert_eq!(
            store.selected_account().unwrap().account_id,
            AccountId::new(2)
        );
    }
}
