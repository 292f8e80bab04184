//! Comprehensive tests for domain_claims

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Currency, LecturerId, Money};

use domain_claims::{
    Claim, ClaimDraft, ClaimError, ClaimService, ClaimStatus, ClaimStore, DocumentError, Role,
    SalaryCeilingPolicy,
};
use test_utils::{
    assert_salary_invariant, assert_status, claim_strategy, ClaimFixtures, InMemoryClaimStore,
    InMemoryDocumentStore, PrincipalFixtures, TestClaimBuilder,
};

fn service_with(
    store: Arc<InMemoryClaimStore>,
    docs: Arc<InMemoryDocumentStore>,
) -> ClaimService {
    ClaimService::new(store, docs)
}

fn service() -> (ClaimService, Arc<InMemoryClaimStore>, Arc<InMemoryDocumentStore>) {
    let store = Arc::new(InMemoryClaimStore::new());
    let docs = Arc::new(InMemoryDocumentStore::new());
    (service_with(store.clone(), docs.clone()), store, docs)
}

// ============================================================================
// Submission Tests
// ============================================================================

mod submission_tests {
    use super::*;

    #[tokio::test]
    async fn test_valid_submission_is_pending() {
        let (service, _, _) = service();
        let lecturer = PrincipalFixtures::lecturer();

        let claim = service
            .submit(&lecturer, ClaimFixtures::modest_draft(), ClaimFixtures::pdf_upload())
            .await
            .unwrap();

        assert_status(&claim, ClaimStatus::Pending);
        assert_eq!(claim.lecturer_id, lecturer.id);
        assert_eq!(claim.total_salary().amount(), dec!(200));
    }

    #[tokio::test]
    async fn test_submission_saves_the_document() {
        let (service, _, docs) = service();
        let lecturer = PrincipalFixtures::lecturer();

        let claim = service
            .submit(&lecturer, ClaimFixtures::modest_draft(), ClaimFixtures::pdf_upload())
            .await
            .unwrap();

        assert_eq!(docs.saved_names(), vec!["timesheet.pdf".to_string()]);
        assert_eq!(claim.document_path, "/uploads/timesheet.pdf");
    }

    #[tokio::test]
    async fn test_disallowed_extension_stores_nothing() {
        let (service, store, docs) = service();
        let lecturer = PrincipalFixtures::lecturer();

        let result = service
            .submit(&lecturer, ClaimFixtures::modest_draft(), ClaimFixtures::exe_upload())
            .await;

        assert!(matches!(
            result,
            Err(ClaimError::Document(DocumentError::DisallowedExtension { .. }))
        ));
        assert!(store.is_empty());
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_empty_upload_is_rejected() {
        let (service, store, _) = service();
        let lecturer = PrincipalFixtures::lecturer();

        let result = service
            .submit(&lecturer, ClaimFixtures::modest_draft(), ClaimFixtures::empty_upload())
            .await;

        assert!(matches!(result, Err(ClaimError::Document(DocumentError::Empty))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_over_ceiling_is_persisted_rejected_with_note() {
        let (service, store, _) = service();
        let lecturer = PrincipalFixtures::lecturer();

        // 300h x R50 = R15000, over the R5000 ceiling
        let claim = service
            .submit(&lecturer, ClaimFixtures::excessive_draft(), ClaimFixtures::pdf_upload())
            .await
            .unwrap();

        assert_status(&claim, ClaimStatus::Rejected);
        let note = claim.notes.as_deref().unwrap();
        assert!(note.contains("exceeds"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_exactly_at_ceiling_stays_pending() {
        let (service, _, _) = service();
        let lecturer = PrincipalFixtures::lecturer();

        let draft = ClaimDraft {
            lecturer_name: "John Doe".to_string(),
            hours_worked: dec!(100),
            hourly_rate: Money::new(dec!(50), Currency::ZAR),
            notes: None,
        };
        let claim = service
            .submit(&lecturer, draft, ClaimFixtures::pdf_upload())
            .await
            .unwrap();

        assert_status(&claim, ClaimStatus::Pending);
    }

    #[tokio::test]
    async fn test_custom_ceiling_applies() {
        let store = Arc::new(InMemoryClaimStore::new());
        let docs = Arc::new(InMemoryDocumentStore::new());
        let service = ClaimService::new(store, docs)
            .with_ceiling(SalaryCeilingPolicy::new(Money::new(dec!(100), Currency::ZAR)));
        let lecturer = PrincipalFixtures::lecturer();

        let claim = service
            .submit(&lecturer, ClaimFixtures::modest_draft(), ClaimFixtures::pdf_upload())
            .await
            .unwrap();

        // R200 exceeds the lowered R100 ceiling
        assert_status(&claim, ClaimStatus::Rejected);
    }
}

// ============================================================================
// Decision Tests
// ============================================================================

mod decision_tests {
    use super::*;

    async fn submitted_claim(service: &ClaimService) -> Claim {
        let lecturer = PrincipalFixtures::lecturer();
        service
            .submit(&lecturer, ClaimFixtures::modest_draft(), ClaimFixtures::pdf_upload())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_coordinator_approves_pending_claim() {
        let (service, store, _) = service();
        let claim = submitted_claim(&service).await;

        let approved = service
            .approve(&PrincipalFixtures::coordinator(), claim.id)
            .await
            .unwrap();

        assert_status(&approved, ClaimStatus::Approved);
        let stored = store.snapshot().pop().unwrap();
        assert_status(&stored, ClaimStatus::Approved);
    }

    #[tokio::test]
    async fn test_manager_rejects_pending_claim() {
        let (service, _, _) = service();
        let claim = submitted_claim(&service).await;

        let rejected = service
            .reject(&PrincipalFixtures::manager(), claim.id)
            .await
            .unwrap();

        assert_status(&rejected, ClaimStatus::Rejected);
    }

    #[tokio::test]
    async fn test_decision_on_unknown_claim_is_not_found() {
        let (service, _, _) = service();
        let missing = ClaimId::new();

        let result = service.approve(&PrincipalFixtures::manager(), missing).await;
        assert!(matches!(result, Err(ClaimError::NotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn test_lecturer_cannot_decide() {
        let (service, _, _) = service();
        let claim = submitted_claim(&service).await;

        let result = service.approve(&PrincipalFixtures::lecturer(), claim.id).await;
        assert!(matches!(result, Err(ClaimError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_hr_cannot_decide() {
        let (service, _, _) = service();
        let claim = submitted_claim(&service).await;

        let result = service.reject(&PrincipalFixtures::hr(), claim.id).await;
        assert!(matches!(result, Err(ClaimError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_redeciding_a_decided_claim_overwrites() {
        let (service, _, _) = service();
        let claim = submitted_claim(&service).await;
        let manager = PrincipalFixtures::manager();

        service.approve(&manager, claim.id).await.unwrap();
        let rejected = service.reject(&manager, claim.id).await.unwrap();

        // Last decision wins
        assert_status(&rejected, ClaimStatus::Rejected);
    }
}

// ============================================================================
// Listing Tests
// ============================================================================

mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn test_pending_queue_excludes_decided_claims() {
        let (service, store, _) = service();
        store.insert(&TestClaimBuilder::new().build()).await.unwrap();
        store.insert(&TestClaimBuilder::new().approved().build()).await.unwrap();
        store.insert(&TestClaimBuilder::new().rejected().build()).await.unwrap();

        let pending = service
            .list_pending(&PrincipalFixtures::coordinator())
            .await
            .unwrap();

        assert_eq!(pending.len(), 1);
        assert_status(&pending[0], ClaimStatus::Pending);
    }

    #[tokio::test]
    async fn test_pending_queue_needs_a_decider_role() {
        let (service, _, _) = service();

        let result = service.list_pending(&PrincipalFixtures::lecturer()).await;
        assert!(matches!(result, Err(ClaimError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_own_claims_are_isolated_per_lecturer() {
        let (service, _, _) = service();
        let alice = PrincipalFixtures::lecturer_with_id(LecturerId::new());
        let bob = PrincipalFixtures::lecturer_with_id(LecturerId::new());

        service
            .submit(&alice, ClaimFixtures::modest_draft(), ClaimFixtures::pdf_upload())
            .await
            .unwrap();
        service
            .submit(&bob, ClaimFixtures::modest_draft(), ClaimFixtures::pdf_upload())
            .await
            .unwrap();

        let own = service.list_own(&alice).await.unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].lecturer_id, alice.id);
    }

    #[tokio::test]
    async fn test_own_claims_is_lecturer_only() {
        let (service, _, _) = service();

        let result = service.list_own(&PrincipalFixtures::hr()).await;
        assert!(matches!(result, Err(ClaimError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_list_all_covers_every_status() {
        let (service, store, _) = service();
        store.insert(&TestClaimBuilder::new().build()).await.unwrap();
        store.insert(&TestClaimBuilder::new().approved().build()).await.unwrap();
        store.insert(&TestClaimBuilder::new().rejected().build()).await.unwrap();

        let all = service.list_all(&PrincipalFixtures::hr()).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_list_all_denied_to_lecturers() {
        let (service, _, _) = service();

        let result = service.list_all(&PrincipalFixtures::lecturer()).await;
        assert!(matches!(result, Err(ClaimError::Forbidden { .. })));
    }
}

// ============================================================================
// Deletion Tests
// ============================================================================

mod deletion_tests {
    use super::*;

    #[tokio::test]
    async fn test_manager_deletes_a_claim() {
        let (service, store, _) = service();
        let claim = TestClaimBuilder::new().build();
        store.insert(&claim).await.unwrap();

        service
            .delete(&PrincipalFixtures::manager(), claim.id)
            .await
            .unwrap();

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_claim_is_not_found() {
        let (service, _, _) = service();
        let missing = ClaimId::new();

        let result = service.delete(&PrincipalFixtures::coordinator(), missing).await;
        assert!(matches!(result, Err(ClaimError::NotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn test_lecturer_cannot_delete() {
        let (service, store, _) = service();
        let claim = TestClaimBuilder::new().build();
        store.insert(&claim).await.unwrap();

        let result = service.delete(&PrincipalFixtures::lecturer(), claim.id).await;
        assert!(matches!(result, Err(ClaimError::Forbidden { .. })));
        assert_eq!(store.len(), 1);
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report_tests {
    use super::*;

    #[tokio::test]
    async fn test_report_has_one_row_per_approved_claim() {
        let (service, store, _) = service();
        for _ in 0..3 {
            store.insert(&TestClaimBuilder::new().approved().build()).await.unwrap();
        }
        store.insert(&TestClaimBuilder::new().build()).await.unwrap();

        let csv = service
            .approved_claims_report(&PrincipalFixtures::hr())
            .await
            .unwrap();

        assert_eq!(csv.trim_end().lines().count(), 4);
        assert!(csv.starts_with("ClaimId,LecturerName,HoursWorked,HourlyRate,TotalSalary,SubmissionDate"));
    }

    #[tokio::test]
    async fn test_report_dates_are_day_precision() {
        let (service, store, _) = service();
        let claim = TestClaimBuilder::new().approved().build();
        let expected = claim.submitted_at.format("%Y-%m-%d").to_string();
        store.insert(&claim).await.unwrap();

        let csv = service
            .approved_claims_report(&PrincipalFixtures::manager())
            .await
            .unwrap();

        assert!(csv.lines().nth(1).unwrap().ends_with(&expected));
    }

    #[tokio::test]
    async fn test_report_requires_a_viewing_role() {
        let (service, _, _) = service();

        let result = service
            .approved_claims_report(&PrincipalFixtures::lecturer())
            .await;
        assert!(matches!(result, Err(ClaimError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_report_surfaces_store_failures() {
        let (service, store, _) = service();
        store.set_unavailable(true);

        let result = service.approved_claims_report(&PrincipalFixtures::hr()).await;
        assert!(matches!(result, Err(ClaimError::Store(_))));
    }
}

// ============================================================================
// Role Tests
// ============================================================================

mod role_tests {
    use super::*;

    #[test]
    fn test_legacy_coordinator_spelling_parses() {
        assert_eq!("Co-ordinator".parse::<Role>().unwrap(), Role::Coordinator);
        assert_eq!("Coordinator".parse::<Role>().unwrap(), Role::Coordinator);
    }

    #[test]
    fn test_multi_role_principal_combines_capabilities() {
        let principal = PrincipalFixtures::with_roles(vec![Role::Lecturer, Role::Coordinator]);
        assert!(principal.is_lecturer());
        assert!(principal.can_decide());
        assert!(principal.can_view_all());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_total_salary_is_always_the_product(claim in claim_strategy()) {
        assert_salary_invariant(&claim);
    }

    #[test]
    fn prop_decided_claims_are_terminal(claim in claim_strategy()) {
        let mut claim = claim;
        claim.approve();
        prop_assert!(claim.status.is_terminal());
        claim.reject();
        prop_assert!(claim.status.is_terminal());
    }
}
