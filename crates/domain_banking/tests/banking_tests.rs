//! Comprehensive tests for domain_banking

use rust_decimal_macros::dec;

use core_kernel::{AccountNumber, Money};
use domain_banking::{
    bank_for_account_number, check_transfer_funds, AccountOverview, AccountStore,
    BankingAccount, Transaction, TransactionFilter, TypeFilter,
};

// ============================================================================
// Bank directory scenarios
// ============================================================================

mod directory_tests {
    use super::*;

    #[test]
    fn test_account_number_11012345678_is_hana() {
        let bank = bank_for_account_number(&AccountNumber::new("11012345678")).unwrap();
        assert_eq!(bank.name, "하나은행");
        assert_eq!(bank.code, "081");
    }

    #[test]
    fn test_every_registered_code_resolves_to_itself() {
        for code in ["081", "004", "088", "020", "003", "011", "090", "092"] {
            let number = AccountNumber::new(format!("{}12345678", code));
            let bank = bank_for_account_number(&number).unwrap();
            assert_eq!(bank.code, code, "code {} resolved to {}", code, bank.name);
        }
    }
}

// ============================================================================
// Transfer guard scenarios
// ============================================================================

mod transfer_tests {
    use super::*;

    #[test]
    fn test_insufficient_balance_modal_content() {
        // balance 100,000 / requested 150,000 blocks with the literal lines
        let blocked =
            check_transfer_funds(Money::won(100_000), Money::won(150_000)).unwrap_err();

        assert_eq!(blocked.balance_line(), "현재 잔액: 100,000원");
        assert_eq!(blocked.requested_line(), "송금 요청 금액: 150,000원");
    }

    #[test]
    fn test_exact_balance_transfer_is_allowed() {
        assert!(check_transfer_funds(Money::won(100_000), Money::won(100_000)).is_ok());
    }
}

// ============================================================================
// Wire payload deserialization
// ============================================================================

mod wire_tests {
    use super::*;

    #[test]
    fn test_history_page_deserializes_with_mixed_date_shapes() {
        let payload = r#"[
            {
                "transactionId": 9001,
                "transactionNumber": "TXN-20240315-0001",
                "fromAccountNumber": "110-12-345678",
                "transactionType": "WITHDRAWAL",
                "transactionCategory": "FOOD",
                "amount": -12000,
                "balanceAfter": 88000,
                "transactionDirection": "DEBIT",
                "description": "점심 결제",
                "transactionStatus": "COMPLETED",
                "transactionDate": [2024, 3, 15, 12, 30, 0],
                "memo": null
            },
            {
                "transactionId": 9002,
                "transactionNumber": "TXN-20240315-0002",
                "toAccountNumber": "110-12-345678",
                "transactionType": "DEPOSIT",
                "transactionCategory": "SALARY",
                "amount": 2500000,
                "balanceAfter": 2588000,
                "transactionDirection": "CREDIT",
                "description": "3월 급여",
                "transactionStatus": "COMPLETED",
                "transactionDate": "2024-03-15T09:00:00"
            }
        ]"#;

        let rows: Vec<Transaction> = serde_json::from_str(payload).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount_display(), "12,000원");
        assert_eq!(
            rows[0].transaction_date.format_date_korean(),
            "2024. 03. 15."
        );
        assert_eq!(rows[1].transaction_date.format_time_korean(), "09:00");
    }

    #[test]
    fn test_unknown_transaction_type_is_rejected() {
        let payload = r#"{
            "transactionId": 1,
            "transactionNumber": "TXN-1",
            "transactionType": "MYSTERY",
            "amount": 1,
            "transactionDirection": "CREDIT",
            "transactionStatus": "COMPLETED",
            "transactionDate": "2024-01-01T00:00:00"
        }"#;
        let result: Result<Transaction, _> = serde_json::from_str(payload);
        assert!(result.is_err());
    }

    #[test]
    fn test_account_with_unknown_type_code_is_rejected() {
        let payload = r#"{
            "accountId": 1,
            "userId": 1,
            "accountNumber": "110-00-000001",
            "accountName": "통장",
            "accountType": 42,
            "accountStatus": "ACTIVE",
            "balance": 1000,
            "currencyCode": "KRW",
            "openedDate": null,
            "createdAt": null,
            "updatedAt": null
        }"#;
        let result: Result<BankingAccount, _> = serde_json::from_str(payload);
        assert!(result.is_err());
    }
}

// ============================================================================
// Store + overview interplay
// ============================================================================

mod store_tests {
    use super::*;

    #[test]
    fn test_overview_install_then_filter_flow() {
        let payload = r#"[
            {
                "accountId": 1,
                "userId": 7,
                "accountNumber": "110-12-345678",
                "accountName": "주거래 통장",
                "accountType": 1,
                "accountStatus": "ACTIVE",
                "balance": 100000,
                "currencyCode": "KRW",
                "openedDate": null,
                "createdAt": null,
                "updatedAt": null
            },
            {
                "accountId": 2,
                "userId": 7,
                "accountNumber": "110-90-000001",
                "accountName": "IRP 계좌",
                "accountType": 6,
                "accountStatus": "ACTIVE",
                "balance": 3000000,
                "currencyCode": "KRW",
                "openedDate": null,
                "createdAt": null,
                "updatedAt": null
            }
        ]"#;

        let accounts: Vec<BankingAccount> = serde_json::from_str(payload).unwrap();
        let overview = AccountOverview::assemble(accounts, None);

        // The IRP-named kind-6 row leaves the banking list even without a
        // product-service summary
        assert_eq!(overview.banking_accounts.len(), 1);
        assert_eq!(overview.total_banking_balance, dec!(100000));

        let mut store = AccountStore::new();
        store.set_all_accounts_data(overview);
        assert!(!store.has_irp_account());
        assert_eq!(store.accounts().len(), 1);
    }

    #[test]
    fn test_filter_defaults_describe_initial_view() {
        let filter = TransactionFilter::default();
        assert_eq!(filter.type_filter, TypeFilter::All);
        assert_eq!(filter.summary(), "전체조회 / 최신순 / 3개월");
    }
}
