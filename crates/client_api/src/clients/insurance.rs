//! Insurance service client

use serde::Serialize;

use domain_insurance::{InsuranceApplication, InsuranceProduct, PersonalInfo, PremiumQuote};

use crate::dto::insurance::{
    AckResponse, BankAccountValidationResponse, DuplicateCheckResponse,
    PremiumCalculationRequest, SubmissionResponse, ValidationResponse,
};
use crate::error::ApiError;
use crate::http::HttpClient;

/// Client for the insurance endpoints
#[derive(Debug, Clone)]
pub struct InsuranceClient {
    http: HttpClient,
}

impl InsuranceClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Product catalog, optionally narrowed to one category
    pub async fn products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<InsuranceProduct>, ApiError> {
        #[derive(Serialize)]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<&'a str>,
        }

        self.http.get_query("/products", &Params { category }).await
    }

    /// One product by id
    pub async fn product(&self, product_id: &str) -> Result<InsuranceProduct, ApiError> {
        self.http.get(&format!("/products/{}", product_id)).await
    }

    /// Server-side premium calculation
    pub async fn calculate_premium(
        &self,
        request: &PremiumCalculationRequest,
    ) -> Result<PremiumQuote, ApiError> {
        self.http.post("/premium/calculate", request).await
    }

    /// Submits a completed application
    pub async fn submit_application(
        &self,
        application: &InsuranceApplication,
    ) -> Result<SubmissionResponse, ApiError> {
        self.http.post("/applications", application).await
    }

    /// One application by id
    pub async fn application(
        &self,
        application_id: &str,
    ) -> Result<InsuranceApplication, ApiError> {
        self.http
            .get(&format!("/applications/{}", application_id))
            .await
    }

    /// All applications of one user
    pub async fn applications_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<InsuranceApplication>, ApiError> {
        self.http
            .get(&format!("/applications/user/{}", user_id))
            .await
    }

    /// Updates an application's status
    pub async fn update_application_status(
        &self,
        application_id: &str,
        status: &str,
    ) -> Result<AckResponse, ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            status: &'a str,
        }

        self.http
            .post(
                &format!("/applications/{}/status", application_id),
                &Body { status },
            )
            .await
    }

    /// Server-side personal-info validation
    pub async fn validate_personal_info(
        &self,
        info: &PersonalInfo,
    ) -> Result<ValidationResponse, ApiError> {
        self.http.post("/validate/personal-info", info).await
    }

    /// Checks whether a resident number is already registered
    pub async fn check_resident_number(
        &self,
        resident_number: &str,
    ) -> Result<DuplicateCheckResponse, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            resident_number: &'a str,
        }

        self.http
            .post(
                "/validate/resident-number",
                &Body { resident_number },
            )
            .await
    }

    /// Validates premium payment account ownership
    pub async fn validate_bank_account(
        &self,
        bank_code: &str,
        account_number: &str,
        account_holder: &str,
    ) -> Result<BankAccountValidationResponse, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            bank_code: &'a str,
            account_number: &'a str,
            account_holder: &'a str,
        }

        self.http
            .post(
                "/validate/bank-account",
                &Body {
                    bank_code,
                    account_number,
                    account_holder,
                },
            )
            .await
    }
}
