//! The insurance application and its wizard steps
//!
//! A linear six-step flow; each step writes one slice of the application.
//! Navigation is free (later steps never verify that earlier ones were
//! completed), so the submission check is the single place where missing
//! slices surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rust_decimal::Decimal;

use crate::error::InsuranceError;
use crate::personal::PersonalInfo;
use crate::product::{InsuranceProduct, PremiumQuote};

/// Application lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    Completed,
}

/// The six wizard steps with their persisted codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ApplicationStep {
    ProductSelection,
    TermsAgreement,
    PremiumCalculation,
    PersonalInfo,
    FinalConfirmation,
    Completion,
}

impl ApplicationStep {
    /// The persisted step code
    pub fn code(&self) -> u8 {
        match self {
            ApplicationStep::ProductSelection => 0,
            ApplicationStep::TermsAgreement => 1,
            ApplicationStep::PremiumCalculation => 2,
            ApplicationStep::PersonalInfo => 3,
            ApplicationStep::FinalConfirmation => 4,
            ApplicationStep::Completion => 5,
        }
    }

    /// Maps a persisted code back to a step; unknown codes are errors
    pub fn from_code(code: u8) -> Result<Self, InsuranceError> {
        match code {
            0 => Ok(ApplicationStep::ProductSelection),
            1 => Ok(ApplicationStep::TermsAgreement),
            2 => Ok(ApplicationStep::PremiumCalculation),
            3 => Ok(ApplicationStep::PersonalInfo),
            4 => Ok(ApplicationStep::FinalConfirmation),
            5 => Ok(ApplicationStep::Completion),
            other => Err(InsuranceError::UnknownStep(other)),
        }
    }

    /// Korean step title shown in the progress header
    pub fn title(&self) -> &'static str {
        match self {
            ApplicationStep::ProductSelection => "상품 선택",
            ApplicationStep::TermsAgreement => "약관 동의",
            ApplicationStep::PremiumCalculation => "보험료 계산",
            ApplicationStep::PersonalInfo => "개인정보 입력",
            ApplicationStep::FinalConfirmation => "최종 확인",
            ApplicationStep::Completion => "가입 완료",
        }
    }

    /// The following step, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_code(self.code() + 1).ok()
    }

    /// The preceding step, if any
    pub fn back(&self) -> Option<Self> {
        self.code().checked_sub(1).and_then(|c| Self::from_code(c).ok())
    }
}

impl From<ApplicationStep> for u8 {
    fn from(step: ApplicationStep) -> u8 {
        step.code()
    }
}

impl TryFrom<u8> for ApplicationStep {
    type Error = InsuranceError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// Premium payment cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

/// Coverage and payment-term selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceDetails {
    pub coverage_amount: Decimal,
    pub premium: Decimal,
    /// 납입기간 (년)
    pub payment_period: u8,
    /// 보장기간 (년)
    pub coverage_period: u8,
    pub payment_frequency: PaymentFrequency,
    #[serde(default)]
    pub riders: Vec<String>,
}

/// How the premium is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    BankTransfer,
    CreditCard,
    DebitCard,
}

/// Bank-transfer payment details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountPayment {
    pub bank_code: String,
    pub account_number: String,
    pub account_holder: String,
}

/// Card payment details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayment {
    pub card_number: String,
    pub expiry_date: String,
    pub card_holder: String,
}

/// The payment slice of the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccountPayment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CardPayment>,
    pub auto_transfer: bool,
    /// 매월 이체일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_date: Option<u8>,
}

/// The agreements slice of the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementInfo {
    pub terms_agreed: bool,
    pub privacy_agreed: bool,
    pub marketing_agreed: bool,
    pub medical_disclosure_agreed: bool,
    pub agreement_date: DateTime<Utc>,
}

impl AgreementInfo {
    /// Marketing consent is optional; everything else is required
    pub fn required_agreements_given(&self) -> bool {
        self.terms_agreed && self.privacy_agreed && self.medical_disclosure_agreed
    }
}

/// A complete application, ready for submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceApplication {
    pub product_id: String,
    pub applicant_info: PersonalInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_info: Option<PersonalInfo>,
    pub insurance_details: InsuranceDetails,
    pub payment_info: PaymentInfo,
    pub agreement_info: AgreementInfo,
    pub status: ApplicationStatus,
    pub application_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
}

/// The partially-built application the wizard accumulates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub current_step: ApplicationStep,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_product: Option<InsuranceProduct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_info: Option<PersonalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_info: Option<PersonalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_details: Option<InsuranceDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<PaymentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_info: Option<AgreementInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_quote: Option<PremiumQuote>,
    pub status: ApplicationStatus,
    pub application_date: DateTime<Utc>,
}

impl ApplicationDraft {
    /// An empty draft positioned on the first step
    pub fn new() -> Self {
        Self {
            current_step: ApplicationStep::ProductSelection,
            selected_product: None,
            product_id: None,
            applicant_info: None,
            beneficiary_info: None,
            insurance_details: None,
            payment_info: None,
            agreement_info: None,
            premium_quote: None,
            status: ApplicationStatus::Draft,
            application_date: Utc::now(),
        }
    }

    /// Moves to any step; prior steps are deliberately not re-validated
    pub fn go_to_step(&mut self, step: ApplicationStep) {
        self.current_step = step;
    }

    /// Records the chosen product and its id
    pub fn select_product(&mut self, product: InsuranceProduct) {
        self.product_id = Some(product.id.clone());
        self.selected_product = Some(product);
    }

    pub fn set_applicant_info(&mut self, info: PersonalInfo) {
        self.applicant_info = Some(info);
    }

    pub fn set_beneficiary_info(&mut self, info: PersonalInfo) {
        self.beneficiary_info = Some(info);
    }

    pub fn set_insurance_details(&mut self, details: InsuranceDetails) {
        self.insurance_details = Some(details);
    }

    pub fn set_payment_info(&mut self, info: PaymentInfo) {
        self.payment_info = Some(info);
    }

    pub fn set_agreement_info(&mut self, info: AgreementInfo) {
        self.agreement_info = Some(info);
    }

    pub fn set_premium_quote(&mut self, quote: PremiumQuote) {
        self.premium_quote = Some(quote);
    }

    /// Names the slices a submission would still be missing
    pub fn missing_sections(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.product_id.is_none() {
            missing.push("productId".to_string());
        }
        if self.applicant_info.is_none() {
            missing.push("applicantInfo".to_string());
        }
        if self.insurance_details.is_none() {
            missing.push("insuranceDetails".to_string());
        }
        if self.payment_info.is_none() {
            missing.push("paymentInfo".to_string());
        }
        match &self.agreement_info {
            None => missing.push("agreementInfo".to_string()),
            Some(agreement) if !agreement.required_agreements_given() => {
                missing.push("agreementInfo".to_string());
            }
            Some(_) => {}
        }
        missing
    }

    /// Assembles the submission payload, or reports every missing slice
    pub fn build_application(&self) -> Result<InsuranceApplication, InsuranceError> {
        let missing = self.missing_sections();
        if !missing.is_empty() {
            return Err(InsuranceError::IncompleteApplication { missing });
        }

        Ok(InsuranceApplication {
            product_id: self.product_id.clone().expect("checked above"),
            applicant_info: self.applicant_info.clone().expect("checked above"),
            beneficiary_info: self.beneficiary_info.clone(),
            insurance_details: self.insurance_details.clone().expect("checked above"),
            payment_info: self.payment_info.clone().expect("checked above"),
            agreement_info: self.agreement_info.clone().expect("checked above"),
            status: self.status,
            application_date: self.application_date,
            policy_number: None,
        })
    }

    /// Marks the application finished and jumps to the completion step
    pub fn complete(&mut self) {
        self.current_step = ApplicationStep::Completion;
        self.status = ApplicationStatus::Completed;
    }

    /// Restores the initial empty-draft state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self::new()
    }
}
