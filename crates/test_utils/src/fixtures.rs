//! Common test fixtures

use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use rust_decimal_macros::dec;

use core_kernel::{Money, WireDateTime};
use domain_insurance::{Address, Gender, MaritalStatus, PersonalInfo};
use domain_portfolio::PortfolioWeights;

/// Standard monetary amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The balance used throughout the transfer scenarios
    pub fn balance() -> Money {
        Money::won(100_000)
    }

    /// A request that exceeds [`MoneyFixtures::balance`]
    pub fn over_request() -> Money {
        Money::won(150_000)
    }

    pub fn irp_total() -> Money {
        Money::won(10_000_000)
    }
}

/// Standard weight sets
pub struct WeightFixtures;

impl WeightFixtures {
    /// The fixed fallback seed {5, 40, 55}
    pub fn seed() -> PortfolioWeights {
        PortfolioWeights::default_seed()
    }

    /// A balanced custom entry
    pub fn balanced_custom() -> PortfolioWeights {
        PortfolioWeights::new(dec!(10), dec!(40), dec!(50))
    }

    /// A fund-heavy set that trips the 70% cap
    pub fn over_fund_cap() -> PortfolioWeights {
        PortfolioWeights::new(dec!(5), dec!(20), dec!(75))
    }

    /// Sums to 105 - fails the gate
    pub fn unbalanced() -> PortfolioWeights {
        PortfolioWeights::new(dec!(10), dec!(40), dec!(55))
    }
}

/// Fixed timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn simulation_time() -> WireDateTime {
        WireDateTime::parse_iso("2024-03-15T10:30:00").expect("fixture datetime")
    }

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("fixture date")
    }
}

/// Generated applicant data
pub struct PersonFixtures;

impl PersonFixtures {
    /// A personal-info slice that passes every field rule
    pub fn applicant() -> PersonalInfo {
        PersonalInfo {
            name: "김하나".to_string(),
            resident_number: "900615-1234567".to_string(),
            gender: Gender::M,
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).expect("fixture birth date"),
            phone_number: "010-1234-5678".to_string(),
            email: SafeEmail().fake(),
            address: Address {
                zip_code: "04538".to_string(),
                address1: "서울특별시 중구 을지로 66".to_string(),
                address2: None,
            },
            occupation: "회사원".to_string(),
            marital_status: MaritalStatus::Single,
        }
    }
}
