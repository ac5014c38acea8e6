//! Strongly-typed identifiers for domain entities
//!
//! The backend addresses customers, accounts, transactions, and rebalancing
//! jobs with plain numeric ids. Newtype wrappers keep those ids from being
//! mixed up while staying transparent on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw backend id
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw id value
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

// User/customer identifiers (the banking service keys on userId, the IRP
// services on customerId; both are the same numeric id space upstream)
define_id!(UserId);
define_id!(CustomerId);

// Banking identifiers
define_id!(AccountId);
define_id!(TransactionId);

// Rebalancing identifiers
define_id!(JobId);

/// A bank account number as displayed to the user
///
/// Account numbers may arrive hyphenated (`081-01-123456`) or bare
/// (`08101123456`); lookups always work on the normalized digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the account number exactly as received
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the account number with hyphens stripped
    pub fn normalized(&self) -> String {
        self.0.chars().filter(|c| *c != '-').collect()
    }

    /// Returns the first three digits of the normalized number, used for
    /// bank identification
    pub fn prefix3(&self) -> Option<String> {
        let normalized = self.normalized();
        if normalized.len() < 3 {
            return None;
        }
        Some(normalized[..3].to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountNumber {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
