//! Portfolio recommendations
//!
//! Read-only, fetched once per customer view. The recommended weights seed
//! the custom-weight inputs; everything else is display copy.

use serde::{Deserialize, Serialize};

use core_kernel::{AccountNumber, CustomerId, WireDateTime};

use crate::weights::PortfolioWeights;

/// Customer risk profile classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskProfileType {
    Stable,
    StablePlus,
    Neutral,
    Aggressive,
}

impl RiskProfileType {
    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskProfileType::Stable => "안정형",
            RiskProfileType::StablePlus => "안정추구형",
            RiskProfileType::Neutral => "중립형",
            RiskProfileType::Aggressive => "적극형",
        }
    }
}

/// A weighted portfolio suggestion with its provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMix {
    #[serde(flatten)]
    pub weights: PortfolioWeights,
    #[serde(default)]
    pub description: Option<String>,
    /// "RISK_PROFILE", "SIMILAR_USERS", or "COMBINED"
    #[serde(default)]
    pub basis: Option<String>,
}

/// The similar-user cohort's portfolio plus match statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarUserMix {
    #[serde(flatten)]
    pub weights: PortfolioWeights,
    #[serde(default)]
    pub similar_user_count: Option<u32>,
    #[serde(default)]
    pub average_similarity: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub basis: Option<String>,
}

/// Generation metadata attached to a recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationMetadata {
    #[serde(default)]
    pub generated_at: Option<WireDateTime>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub total_users_analyzed: Option<u32>,
    #[serde(default)]
    pub similar_users_found: Option<u32>,
    #[serde(default)]
    pub min_similarity_threshold: Option<f64>,
    #[serde(default)]
    pub constraints: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// The full recommendation for one customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecommendation {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub irp_account_number: Option<AccountNumber>,
    #[serde(default)]
    pub risk_profile_type: Option<RiskProfileType>,
    #[serde(default)]
    pub risk_profile_description: Option<String>,
    #[serde(default)]
    pub model_portfolio: Option<PortfolioMix>,
    #[serde(default)]
    pub similar_user_portfolio: Option<SimilarUserMix>,
    pub recommended_portfolio: PortfolioMix,
    #[serde(default)]
    pub metadata: Option<RecommendationMetadata>,
}

impl PortfolioRecommendation {
    /// The weights used to seed the custom-weight inputs
    pub fn recommended_weights(&self) -> PortfolioWeights {
        self.recommended_portfolio.weights
    }
}
