//! Insurance service request/response envelopes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_insurance::{Gender, PaymentFrequency};

/// Premium calculation input
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumCalculationRequest {
    pub product_id: String,
    pub age: u8,
    pub gender: Gender,
    pub coverage_amount: Decimal,
    pub payment_period: u8,
    pub coverage_period: u8,
    pub payment_frequency: PaymentFrequency,
    pub riders: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<Vec<String>>,
}

/// Result of submitting an application
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub application_id: String,
    #[serde(default)]
    pub policy_number: Option<String>,
}

/// Server-side personal-info validation result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Resident-number duplicate check result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckResponse {
    pub duplicate: bool,
}

/// Bank account ownership validation result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountValidationResponse {
    pub valid: bool,
    pub message: String,
}

/// Generic ack for status updates
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_premium_request_wire_shape() {
        let request = PremiumCalculationRequest {
            product_id: "LIFE-001".to_string(),
            age: 34,
            gender: Gender::F,
            coverage_amount: dec!(100000000),
            payment_period: 20,
            coverage_period: 30,
            payment_frequency: PaymentFrequency::Monthly,
            riders: vec!["암진단 특약".to_string()],
            medical_history: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"paymentFrequency\":\"MONTHLY\""));
        assert!(json.contains("\"gender\":\"F\""));
        assert!(!json.contains("medicalHistory"));
    }

    #[test]
    fn test_validation_response_defaults_errors() {
        let response: ValidationResponse = serde_json::from_str(r#"{"valid": true}"#).unwrap();
        assert!(response.valid);
        assert!(response.errors.is_empty());
    }
}
