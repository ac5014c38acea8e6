//! Applicant personal information
//!
//! Field rules match the application form exactly: resident registration
//! number `000000-0000000`, mobile number `010-0000-0000`, and a basic
//! email shape. Messages are the inline Korean strings the form renders
//! under each field.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use chrono::NaiveDate;

static RESIDENT_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{6}-\d{7}$").expect("resident number pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^010-\d{4}-\d{4}$").expect("phone pattern"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Applicant gender as the backend encodes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

/// Marital status options on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1, message = "우편번호를 입력해주세요."))]
    pub zip_code: String,
    #[validate(length(min = 1, message = "주소를 입력해주세요."))]
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
}

/// The applicant (or beneficiary) personal-information slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[validate(length(min = 1, message = "이름을 입력해주세요."))]
    pub name: String,

    #[validate(regex(path = *RESIDENT_NUMBER_RE, message = "주민등록번호 형식이 올바르지 않습니다."))]
    pub resident_number: String,

    pub gender: Gender,

    pub birth_date: NaiveDate,

    #[validate(regex(path = *PHONE_RE, message = "휴대폰 번호 형식이 올바르지 않습니다."))]
    pub phone_number: String,

    #[validate(regex(path = *EMAIL_RE, message = "이메일 형식이 올바르지 않습니다."))]
    pub email: String,

    #[validate(nested)]
    pub address: Address,

    #[validate(length(min = 1, message = "직업을 선택해주세요."))]
    pub occupation: String,

    pub marital_status: MaritalStatus,
}

/// Flattens validation failures to per-field inline messages
///
/// Returns `(field, message)` pairs in field order; an empty vec means the
/// form passes.
pub fn field_errors(info: &PersonalInfo) -> Vec<(String, String)> {
    match info.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => {
            let mut flat = Vec::new();
            for (field, failures) in errors.field_errors() {
                for failure in failures {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} 값이 올바르지 않습니다.", field));
                    flat.push((field.to_string(), message));
                }
            }
            flat.sort();
            flat
        }
    }
}
