//! Integration tests for money formatting across the public API

use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, MoneyError};

#[test]
fn won_amounts_render_like_the_banking_ui() {
    // The UI renders balances through ko-KR number grouping with a 원 suffix
    assert_eq!(Money::won(100_000).to_string(), "100,000원");
    assert_eq!(Money::won(150_000).to_string(), "150,000원");
    assert_eq!(Money::won(18_000_000).to_string(), "18,000,000원");
}

#[test]
fn wire_amounts_deserialize_as_plain_numbers() {
    // Backend payloads carry balances as bare JSON numbers
    let amount: rust_decimal::Decimal = serde_json::from_str("1234567.89").unwrap();
    let money = Money::new(amount, Currency::Krw);
    assert_eq!(money.round_to_currency().amount(), dec!(1234568));
}

#[test]
fn cross_currency_operations_are_rejected() {
    let krw = Money::won(1_000);
    let usd = Money::new(dec!(1), Currency::Usd);

    assert!(matches!(
        krw.checked_sub(&usd),
        Err(MoneyError::CurrencyMismatch(_, _))
    ));
}

#[test]
fn balance_comparison_for_transfers() {
    // The transfer guard compares requested amount against the cached balance
    let balance = Money::won(100_000);
    let requested = Money::won(150_000);

    let shortfall = requested.checked_sub(&balance).unwrap();
    assert!(shortfall.is_positive());
    assert_eq!(shortfall.to_string(), "50,000원");
}
