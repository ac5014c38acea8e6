//! Bank directory
//!
//! Static registry mapping account-number prefixes to bank identity.
//! Resolution tries the institution code first (081, 004, ...), then the
//! account-number prefix ranges each bank issues.

use once_cell::sync::Lazy;

use core_kernel::AccountNumber;

/// A bank's identity and the account-number prefixes it issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankPattern {
    /// Korean bank name
    pub name: &'static str,
    /// Institution code
    pub code: &'static str,
    /// Leading three-digit prefixes of issued account numbers
    pub prefixes: &'static [&'static str],
}

static BANK_PATTERNS: Lazy<Vec<BankPattern>> = Lazy::new(|| {
    vec![
        BankPattern {
            name: "하나은행",
            code: "081",
            prefixes: &[
                "110", "111", "112", "113", "114", "115", "116", "117", "118", "119",
            ],
        },
        BankPattern {
            name: "국민은행",
            code: "004",
            prefixes: &["123", "124", "125", "126", "127", "128", "129"],
        },
        BankPattern {
            name: "신한은행",
            code: "088",
            prefixes: &["456", "457", "458", "459"],
        },
        BankPattern {
            name: "우리은행",
            code: "020",
            prefixes: &[
                "100", "101", "102", "103", "104", "105", "106", "107", "108", "109",
            ],
        },
        BankPattern {
            name: "기업은행",
            code: "003",
            prefixes: &["003", "004", "005", "006", "007", "008", "009"],
        },
        BankPattern {
            name: "NH농협",
            code: "011",
            prefixes: &["301", "302", "303", "304", "305", "306", "307", "308", "309"],
        },
        BankPattern {
            name: "카카오뱅크",
            code: "090",
            prefixes: &["333"],
        },
        BankPattern {
            name: "토스뱅크",
            code: "092",
            prefixes: &["092"],
        },
    ]
});

/// Looks a bank up by its institution code
pub fn bank_by_code(code: &str) -> Option<&'static BankPattern> {
    BANK_PATTERNS.iter().find(|bank| bank.code == code)
}

/// Looks a bank up by its Korean name
pub fn bank_by_name(name: &str) -> Option<&'static BankPattern> {
    BANK_PATTERNS.iter().find(|bank| bank.name == name)
}

/// Looks a bank up by an account-number prefix
pub fn bank_by_prefix(prefix: &str) -> Option<&'static BankPattern> {
    BANK_PATTERNS.iter().find(|bank| bank.prefixes.contains(&prefix))
}

/// Resolves the issuing bank from a full account number
///
/// Hyphens are stripped, the first three digits tried as an institution
/// code, then as an issued prefix. `None` when neither matches.
pub fn bank_for_account_number(account_number: &AccountNumber) -> Option<&'static BankPattern> {
    let prefix = account_number.prefix3()?;
    bank_by_code(&prefix).or_else(|| bank_by_prefix(&prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code() {
        let bank = bank_by_code("081").unwrap();
        assert_eq!(bank.name, "하나은행");
    }

    #[test]
    fn test_lookup_by_name() {
        let bank = bank_by_name("카카오뱅크").unwrap();
        assert_eq!(bank.code, "090");
    }

    #[test]
    fn test_hana_prefix_resolution() {
        // "11012345678" starts with issued prefix 110
        let bank = bank_for_account_number(&AccountNumber::new("11012345678")).unwrap();
        assert_eq!(bank.name, "하나은행");
        assert_eq!(bank.code, "081");
    }

    #[test]
    fn test_code_match_wins_over_prefix() {
        // 004 is both 기업은행's issued prefix and 국민은행's institution code;
        // the code match is tried first
        let bank = bank_for_account_number(&AccountNumber::new("004-12-345678")).unwrap();
        assert_eq!(bank.name, "국민은행");
    }

    #[test]
    fn test_hyphenated_numbers_resolve() {
        let bank = bank_for_account_number(&AccountNumber::new("333-01-999999")).unwrap();
        assert_eq!(bank.name, "카카오뱅크");
    }

    #[test]
    fn test_unknown_prefix_is_none() {
        assert!(bank_for_account_number(&AccountNumber::new("99912345678")).is_none());
    }

    #[test]
    fn test_too_short_number_is_none() {
        assert!(bank_for_account_number(&AccountNumber::new("08")).is_none());
    }
}
