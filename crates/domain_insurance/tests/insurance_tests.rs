//! Comprehensive tests for domain_insurance

use chrono::NaiveDate;
use domain_insurance::{
    field_errors, Address, ApplicationDraft, ApplicationStep, Gender, InsuranceError,
    MaritalStatus, PersonalInfo,
};

fn applicant() -> PersonalInfo {
    PersonalInfo {
        name: "이인플".to_string(),
        resident_number: "900615-2345678".to_string(),
        gender: Gender::F,
        birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        phone_number: "010-9876-5432".to_string(),
        email: "inpl.lee@example.com".to_string(),
        address: Address {
            zip_code: "06236".to_string(),
            address1: "서울특별시 강남구 테헤란로 152".to_string(),
            address2: None,
        },
        occupation: "금융업".to_string(),
        marital_status: MaritalStatus::Married,
    }
}

// ============================================================================
// Personal info validation scenarios
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_resident_number_valid_and_invalid_shapes() {
        let mut info = applicant();

        info.resident_number = "123456-1234567".to_string();
        assert!(field_errors(&info).is_empty());

        info.resident_number = "123456-123".to_string();
        assert!(!field_errors(&info).is_empty());
    }

    #[test]
    fn test_all_field_messages_are_korean_inline_copy() {
        let info = PersonalInfo {
            name: String::new(),
            resident_number: "bad".to_string(),
            phone_number: "123".to_string(),
            email: "nope".to_string(),
            ..applicant()
        };

        let errors = field_errors(&info);
        let messages: Vec<&str> = errors.iter().map(|(_, m)| m.as_str()).collect();

        assert!(messages.contains(&"이름을 입력해주세요."));
        assert!(messages.contains(&"주민등록번호 형식이 올바르지 않습니다."));
        assert!(messages.contains(&"휴대폰 번호 형식이 올바르지 않습니다."));
        assert!(messages.contains(&"이메일 형식이 올바르지 않습니다."));
    }
}

// ============================================================================
// Wizard flow scenarios
// ============================================================================

mod wizard_tests {
    use super::*;

    #[test]
    fn test_six_linear_steps() {
        let mut step = ApplicationStep::ProductSelection;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            step = next;
            visited.push(step);
        }

        assert_eq!(visited.len(), 6);
        assert_eq!(visited.last(), Some(&ApplicationStep::Completion));
    }

    #[test]
    fn test_skipping_ahead_surfaces_gaps_only_at_submission() {
        let mut draft = ApplicationDraft::new();
        draft.set_applicant_info(applicant());
        draft.go_to_step(ApplicationStep::FinalConfirmation);

        let err = draft.build_application().unwrap_err();
        match err {
            InsuranceError::IncompleteApplication { missing } => {
                assert!(missing.contains(&"productId".to_string()));
                assert!(missing.contains(&"insuranceDetails".to_string()));
                assert!(!missing.contains(&"applicantInfo".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_draft_roundtrips_through_json() {
        let mut draft = ApplicationDraft::new();
        draft.set_applicant_info(applicant());
        draft.go_to_step(ApplicationStep::PersonalInfo);

        let json = serde_json::to_string(&draft).unwrap();
        let back: ApplicationDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn test_unknown_persisted_step_code_is_rejected() {
        let draft = ApplicationDraft::new();
        let json = serde_json::to_string(&draft)
            .unwrap()
            .replace("\"currentStep\":0", "\"currentStep\":9");

        let result: Result<ApplicationDraft, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
