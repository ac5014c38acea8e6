//! Insurance products and premium quotes
//!
//! Products are catalog entries; premium amounts are always computed
//! server-side and displayed as received.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::WireDateTime;

/// Product lines, carried on the wire as their Korean display names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "생명보험")]
    Life,
    #[serde(rename = "건강보험")]
    Health,
    #[serde(rename = "자동차보험")]
    Auto,
    #[serde(rename = "여행보험")]
    Travel,
    #[serde(rename = "화재보험")]
    Fire,
}

impl ProductCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Life => "생명보험",
            ProductCategory::Health => "건강보험",
            ProductCategory::Auto => "자동차보험",
            ProductCategory::Travel => "여행보험",
            ProductCategory::Fire => "화재보험",
        }
    }
}

/// One sellable insurance product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceProduct {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub description: String,
    pub coverage: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    pub min_age: u8,
    pub max_age: u8,
    pub min_premium: Decimal,
    pub max_premium: Decimal,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<WireDateTime>,
}

impl InsuranceProduct {
    /// Whether an applicant of the given age falls inside the product's band
    pub fn accepts_age(&self, age: u8) -> bool {
        age >= self.min_age && age <= self.max_age
    }
}

/// One line of the premium breakdown table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumBreakdownRow {
    pub category: String,
    pub amount: Decimal,
    pub description: String,
}

/// Server-computed premium quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumQuote {
    pub base_premium: Decimal,
    pub rider_premium: Decimal,
    pub total_premium: Decimal,
    pub discount: Decimal,
    pub final_premium: Decimal,
    #[serde(default)]
    pub breakdown: Vec<PremiumBreakdownRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_wire_values_are_korean() {
        assert_eq!(
            serde_json::to_string(&ProductCategory::Life).unwrap(),
            "\"생명보험\""
        );
        let parsed: ProductCategory = serde_json::from_str("\"화재보험\"").unwrap();
        assert_eq!(parsed, ProductCategory::Fire);
    }

    #[test]
    fn test_product_age_band() {
        let json = r#"{
            "id": "LIFE-001",
            "name": "든든 생명보험",
            "category": "생명보험",
            "description": "기본 생명보험",
            "coverage": "사망 및 고도장해",
            "benefits": ["사망보험금"],
            "exclusions": ["고의 사고"],
            "minAge": 19,
            "maxAge": 65,
            "minPremium": 30000,
            "maxPremium": 500000,
            "isActive": true
        }"#;

        let product: InsuranceProduct = serde_json::from_str(json).unwrap();
        assert!(product.accepts_age(19));
        assert!(product.accepts_age(65));
        assert!(!product.accepts_age(66));
        assert_eq!(product.min_premium, dec!(30000));
    }

    #[test]
    fn test_premium_quote_wire_shape() {
        let json = r#"{
            "basePremium": 45000,
            "riderPremium": 12000,
            "totalPremium": 57000,
            "discount": 2850,
            "finalPremium": 54150,
            "breakdown": [
                {"category": "기본보험료", "amount": 45000, "description": "주계약"},
                {"category": "특약보험료", "amount": 12000, "description": "암진단 특약"}
            ]
        }"#;

        let quote: PremiumQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.final_premium, dec!(54150));
        assert_eq!(quote.breakdown.len(), 2);
    }
}
