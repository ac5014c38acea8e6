//! The persisted application wizard
//!
//! Wraps an `ApplicationDraft` with an explicit persistence contract:
//! load the snapshot once when the wizard opens, rewrite it after every
//! mutation. `reset` is the only way to clear the persisted draft short
//! of deleting the file.

use infra_store::{SnapshotStore, StoreError};

use crate::application::{
    AgreementInfo, ApplicationDraft, ApplicationStep, InsuranceApplication, InsuranceDetails,
    PaymentInfo,
};
use crate::error::InsuranceError;
use crate::personal::PersonalInfo;
use crate::product::{InsuranceProduct, PremiumQuote};

/// The wizard store: draft state plus its snapshot file
#[derive(Debug)]
pub struct WizardStore {
    store: SnapshotStore,
    draft: ApplicationDraft,
}

impl WizardStore {
    /// Opens the wizard, restoring a persisted draft when one exists
    pub fn open(store: SnapshotStore) -> Result<Self, StoreError> {
        let draft = store.load::<ApplicationDraft>()?.unwrap_or_default();
        Ok(Self { store, draft })
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn current_step(&self) -> ApplicationStep {
        self.draft.current_step
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.draft)
    }

    pub fn go_to_step(&mut self, step: ApplicationStep) -> Result<(), StoreError> {
        self.draft.go_to_step(step);
        self.persist()
    }

    pub fn select_product(&mut self, product: InsuranceProduct) -> Result<(), StoreError> {
        self.draft.select_product(product);
        self.persist()
    }

    pub fn set_applicant_info(&mut self, info: PersonalInfo) -> Result<(), StoreError> {
        self.draft.set_applicant_info(info);
        self.persist()
    }

    pub fn set_beneficiary_info(&mut self, info: PersonalInfo) -> Result<(), StoreError> {
        self.draft.set_beneficiary_info(info);
        self.persist()
    }

    pub fn set_insurance_details(&mut self, details: InsuranceDetails) -> Result<(), StoreError> {
        self.draft.set_insurance_details(details);
        self.persist()
    }

    pub fn set_payment_info(&mut self, info: PaymentInfo) -> Result<(), StoreError> {
        self.draft.set_payment_info(info);
        self.persist()
    }

    pub fn set_agreement_info(&mut self, info: AgreementInfo) -> Result<(), StoreError> {
        self.draft.set_agreement_info(info);
        self.persist()
    }

    pub fn set_premium_quote(&mut self, quote: PremiumQuote) -> Result<(), StoreError> {
        self.draft.set_premium_quote(quote);
        self.persist()
    }

    /// Assembles the submission payload from the persisted slices
    pub fn build_application(&self) -> Result<InsuranceApplication, InsuranceError> {
        self.draft.build_application()
    }

    /// Marks the application finished and persists the final state
    pub fn complete(&mut self) -> Result<(), StoreError> {
        self.draft.complete();
        self.persist()
    }

    /// Restores and persists the initial empty-draft state
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.draft.reset();
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tests::{agreement, details, payment, product};
    use crate::application::ApplicationStatus;
    use crate::personal::tests::valid_info;
    use tempfile::tempdir;

    #[test]
    fn test_open_without_snapshot_starts_empty() {
        let dir = tempdir().unwrap();
        let wizard =
            WizardStore::open(SnapshotStore::new(dir.path().join("wizard.json"))).unwrap();
        assert_eq!(wizard.current_step(), ApplicationStep::ProductSelection);
        assert!(wizard.draft().product_id.is_none());
    }

    #[test]
    fn test_draft_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wizard.json");

        {
            let mut wizard = WizardStore::open(SnapshotStore::new(&path)).unwrap();
            wizard.select_product(product()).unwrap();
            wizard.set_applicant_info(valid_info()).unwrap();
            wizard.go_to_step(ApplicationStep::PremiumCalculation).unwrap();
        }

        // A fresh process reloads exactly what was persisted
        let reopened = WizardStore::open(SnapshotStore::new(&path)).unwrap();
        assert_eq!(reopened.current_step(), ApplicationStep::PremiumCalculation);
        assert_eq!(
            reopened.draft().product_id.as_deref(),
            Some("LIFE-001")
        );
        assert_eq!(
            reopened.draft().applicant_info.as_ref().unwrap().name,
            "김하나"
        );
    }

    #[test]
    fn test_full_flow_to_submission() {
        let dir = tempdir().unwrap();
        let mut wizard =
            WizardStore::open(SnapshotStore::new(dir.path().join("wizard.json"))).unwrap();

        wizard.select_product(product()).unwrap();
        wizard.set_applicant_info(valid_info()).unwrap();
        wizard.set_insurance_details(details()).unwrap();
        wizard.set_payment_info(payment()).unwrap();
        wizard.set_agreement_info(agreement(true)).unwrap();

        let application = wizard.build_application().unwrap();
        assert_eq!(application.product_id, "LIFE-001");

        wizard.complete().unwrap();
        assert_eq!(wizard.draft().status, ApplicationStatus::Completed);
        assert_eq!(wizard.current_step(), ApplicationStep::Completion);
    }

    #[test]
    fn test_incomplete_draft_fails_submission_after_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wizard.json");

        {
            let mut wizard = WizardStore::open(SnapshotStore::new(&path)).unwrap();
            wizard.select_product(product()).unwrap();
        }

        let reopened = WizardStore::open(SnapshotStore::new(&path)).unwrap();
        let err = reopened.build_application().unwrap_err();
        assert!(matches!(err, InsuranceError::IncompleteApplication { .. }));
    }

    #[test]
    fn test_reset_clears_persisted_draft() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wizard.json");

        let mut wizard = WizardStore::open(SnapshotStore::new(&path)).unwrap();
        wizard.select_product(product()).unwrap();
        wizard.reset().unwrap();

        let reopened = WizardStore::open(SnapshotStore::new(&path)).unwrap();
        assert!(reopened.draft().product_id.is_none());
        assert_eq!(reopened.current_step(), ApplicationStep::ProductSelection);
    }
}
