//! Insurance domain
//!
//! The six-step application wizard and its supporting models: products,
//! premium quotes, applicant personal information with field validation,
//! and the persisted draft that survives a restart.
//!
//! Steps never validate their predecessors; gaps surface at submission
//! time as an explicit list of missing sections.

pub mod application;
pub mod error;
pub mod personal;
pub mod product;
pub mod wizard;

pub use application::{
    AgreementInfo, ApplicationDraft, ApplicationStatus, ApplicationStep, BankAccountPayment,
    CardPayment, InsuranceApplication, InsuranceDetails, PaymentFrequency, PaymentInfo,
    PaymentMethod,
};
pub use error::InsuranceError;
pub use personal::{field_errors, Address, Gender, MaritalStatus, PersonalInfo};
pub use product::{InsuranceProduct, PremiumBreakdownRow, PremiumQuote, ProductCategory};
pub use wizard::WizardStore;
