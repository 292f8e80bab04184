//! Cross-crate workflow tests
//!
//! End-to-end scenarios over the service and the in-memory adapters,
//! from submission through decision to the HR report.

use std::sync::Arc;

use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_claims::{ClaimService, ClaimStatus, DocumentUpload};
use test_utils::{ClaimFixtures, InMemoryClaimStore, InMemoryDocumentStore, PrincipalFixtures};

mod submission_to_report_workflow {
    use super::*;
    use domain_claims::ClaimDraft;

    fn service() -> (ClaimService, Arc<InMemoryClaimStore>) {
        let store = Arc::new(InMemoryClaimStore::new());
        let docs = Arc::new(InMemoryDocumentStore::new());
        (ClaimService::new(store.clone(), docs), store)
    }

    /// A lecturer submits, a coordinator approves, HR reports
    #[tokio::test]
    async fn test_full_claim_lifecycle() {
        let (service, _store) = service();
        let lecturer = PrincipalFixtures::lecturer();

        let claim = service
            .submit(&lecturer, ClaimFixtures::modest_draft(), ClaimFixtures::pdf_upload())
            .await
            .unwrap();
        assert_eq!(claim.status, ClaimStatus::Pending);

        let coordinator = PrincipalFixtures::coordinator();
        let pending = service.list_pending(&coordinator).await.unwrap();
        assert_eq!(pending.len(), 1);

        let approved = service.approve(&coordinator, claim.id).await.unwrap();
        assert_eq!(approved.status, ClaimStatus::Approved);

        let csv = service
            .approved_claims_report(&PrincipalFixtures::hr())
            .await
            .unwrap();
        assert_eq!(csv.trim_end().lines().count(), 2);
        assert!(csv.contains(&claim.id.to_string()));
    }

    /// Over-ceiling submissions never reach the review queue
    #[tokio::test]
    async fn test_excessive_claim_skips_the_queue() {
        let (service, _store) = service();

        let claim = service
            .submit(
                &PrincipalFixtures::lecturer(),
                ClaimFixtures::excessive_draft(),
                ClaimFixtures::pdf_upload(),
            )
            .await
            .unwrap();
        assert_eq!(claim.status, ClaimStatus::Rejected);

        let pending = service
            .list_pending(&PrincipalFixtures::manager())
            .await
            .unwrap();
        assert!(pending.is_empty());
    }

    /// A rejected upload leaves no trace in either store
    #[tokio::test]
    async fn test_invalid_document_leaves_no_state() {
        let store = Arc::new(InMemoryClaimStore::new());
        let docs = Arc::new(InMemoryDocumentStore::new());
        let service = ClaimService::new(store.clone(), docs.clone());

        let draft = ClaimDraft {
            lecturer_name: "John Doe".to_string(),
            hours_worked: dec!(10),
            hourly_rate: Money::new(dec!(20), Currency::ZAR),
            notes: None,
        };
        let oversized = DocumentUpload::new("big.pdf", vec![0u8; 5 * 1024 * 1024 + 1]);

        let result = service
            .submit(&PrincipalFixtures::lecturer(), draft, oversized)
            .await;

        assert!(result.is_err());
        assert!(store.is_empty());
        assert!(docs.is_empty());
    }
}
