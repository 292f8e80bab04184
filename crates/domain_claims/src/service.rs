//! Claim lifecycle service
//!
//! Orchestrates the full claim workflow over the storage ports: document
//! validation, submission with automatic salary-ceiling rejection, the
//! approve/reject transitions, listing, deletion, and report generation.
//! Every operation checks the caller's roles before touching the store.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::ClaimId;

use crate::adjudication::SalaryCeilingPolicy;
use crate::authorization::{Principal, Role, DECIDER_ROLES, VIEW_ALL_ROLES};
use crate::claim::{Claim, ClaimDraft, ClaimStatus};
use crate::document::{DocumentUpload, DocumentValidator};
use crate::error::ClaimError;
use crate::ports::{ClaimStore, DocumentStore};
use crate::report::approved_claims_csv;

/// Application service for the claim lifecycle
pub struct ClaimService {
    store: Arc<dyn ClaimStore>,
    documents: Arc<dyn DocumentStore>,
    validator: DocumentValidator,
    ceiling: SalaryCeilingPolicy,
}

impl ClaimService {
    pub fn new(store: Arc<dyn ClaimStore>, documents: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            documents,
            validator: DocumentValidator::default(),
            ceiling: SalaryCeilingPolicy::default(),
        }
    }

    /// Overrides the default salary ceiling policy
    pub fn with_ceiling(mut self, ceiling: SalaryCeilingPolicy) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Overrides the default document validator
    pub fn with_validator(mut self, validator: DocumentValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Submits a new claim with its supporting document
    ///
    /// The document is validated first; on rejection nothing is stored.
    /// Claims whose total salary exceeds the ceiling are persisted directly
    /// as Rejected with an explanatory note. The submitting principal's
    /// identifier is stamped onto the claim.
    pub async fn submit(
        &self,
        principal: &Principal,
        draft: ClaimDraft,
        upload: DocumentUpload,
    ) -> Result<Claim, ClaimError> {
        self.validator.validate_upload(&upload)?;

        let document_path = self.documents.save(&upload.file_name, &upload.bytes).await?;

        let mut claim = Claim::submit(draft, principal.id, document_path);
        if let Some(note) = self
            .ceiling
            .rejection_note(claim.hours_worked, claim.hourly_rate)
        {
            warn!(claim_id = %claim.id, total = %claim.total_salary(), "Claim auto-rejected by salary ceiling");
            claim.reject_with_note(note);
        }

        self.store.insert(&claim).await?;
        info!(claim_id = %claim.id, lecturer = %claim.lecturer_id, status = %claim.status, "Claim submitted");
        Ok(claim)
    }

    /// Approves a claim; Coordinator or Manager only
    pub async fn approve(&self, principal: &Principal, id: ClaimId) -> Result<Claim, ClaimError> {
        self.decide(principal, id, ClaimStatus::Approved).await
    }

    /// Rejects a claim; Coordinator or Manager only
    pub async fn reject(&self, principal: &Principal, id: ClaimId) -> Result<Claim, ClaimError> {
        self.decide(principal, id, ClaimStatus::Rejected).await
    }

    async fn decide(
        &self,
        principal: &Principal,
        id: ClaimId,
        decision: ClaimStatus,
    ) -> Result<Claim, ClaimError> {
        Self::require_any_role(principal, DECIDER_ROLES)?;

        let mut claim = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ClaimError::NotFound(id))?;

        match decision {
            ClaimStatus::Approved => claim.approve(),
            ClaimStatus::Rejected => claim.reject(),
            ClaimStatus::Pending => unreachable!("Pending is never a decision"),
        }

        self.store.update(&claim).await?;
        info!(claim_id = %claim.id, decider = %principal.id, status = %claim.status, "Claim decided");
        Ok(claim)
    }

    /// All pending claims, for the review queue; Coordinator or Manager only
    pub async fn list_pending(&self, principal: &Principal) -> Result<Vec<Claim>, ClaimError> {
        Self::require_any_role(principal, DECIDER_ROLES)?;
        Ok(self.store.list_by_status(ClaimStatus::Pending).await?)
    }

    /// The caller's own claims; Lecturer only
    pub async fn list_own(&self, principal: &Principal) -> Result<Vec<Claim>, ClaimError> {
        Self::require_any_role(principal, &[Role::Lecturer])?;
        Ok(self.store.list_by_lecturer(principal.id).await?)
    }

    /// Every claim in the store; HR, Manager, or Coordinator
    pub async fn list_all(&self, principal: &Principal) -> Result<Vec<Claim>, ClaimError> {
        Self::require_any_role(principal, VIEW_ALL_ROLES)?;
        Ok(self.store.list_all().await?)
    }

    /// Deletes a claim; Coordinator or Manager only
    pub async fn delete(&self, principal: &Principal, id: ClaimId) -> Result<(), ClaimError> {
        Self::require_any_role(principal, DECIDER_ROLES)?;

        if !self.store.remove(id).await? {
            return Err(ClaimError::NotFound(id));
        }
        info!(claim_id = %id, deleted_by = %principal.id, "Claim deleted");
        Ok(())
    }

    /// Renders the CSV report over all approved claims; HR, Manager, or
    /// Coordinator
    pub async fn approved_claims_report(&self, principal: &Principal) -> Result<String, ClaimError> {
        Self::require_any_role(principal, VIEW_ALL_ROLES)?;

        let approved = self.store.list_by_status(ClaimStatus::Approved).await?;
        let csv = approved_claims_csv(&approved)?;
        info!(rows = approved.len(), "Approved-claims report generated");
        Ok(csv)
    }

    fn require_any_role(principal: &Principal, required: &[Role]) -> Result<(), ClaimError> {
        if principal.has_any_role(required) {
            Ok(())
        } else {
            warn!(principal = %principal.id, ?required, "Access denied");
            Err(ClaimError::forbidden(required))
        }
    }
}
