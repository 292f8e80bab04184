//! Claim aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, LecturerId, Money};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Awaiting a coordinator or manager decision
    Pending,
    /// Approved for payment (terminal)
    Approved,
    /// Rejected, either by a reviewer or by the salary ceiling policy (terminal)
    Rejected,
}

impl ClaimStatus {
    /// Returns true for the terminal states
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ClaimStatus::Pending),
            "Approved" => Ok(ClaimStatus::Approved),
            "Rejected" => Ok(ClaimStatus::Rejected),
            other => Err(format!("Unknown claim status: {}", other)),
        }
    }
}

/// The fields a lecturer provides when submitting a claim
///
/// Everything else on [`Claim`] is assigned by the system: the identifier,
/// the submitting principal's id, timestamps, and the document path.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimDraft {
    pub lecturer_name: String,
    pub hours_worked: Decimal,
    pub hourly_rate: Money,
    pub notes: Option<String>,
}

/// A lecturer's claim for payment of worked hours
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Display name of the submitting lecturer
    pub lecturer_name: String,
    /// Identifier of the authenticated principal that submitted the claim
    pub lecturer_id: LecturerId,
    /// Hours worked in the claim period
    pub hours_worked: Decimal,
    /// Rate of pay per hour
    pub hourly_rate: Money,
    /// Status
    pub status: ClaimStatus,
    /// When the claim was submitted
    pub submitted_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
    /// Free-text notes (e.g. the auto-rejection explanation)
    pub notes: Option<String>,
    /// Path of the supporting document in durable storage
    pub document_path: String,
}

impl Claim {
    /// Creates a new pending claim from a submitted draft
    pub fn submit(draft: ClaimDraft, lecturer_id: LecturerId, document_path: String) -> Self {
        let now = Utc::now();

        Self {
            id: ClaimId::new_v7(),
            lecturer_name: draft.lecturer_name,
            lecturer_id,
            hours_worked: draft.hours_worked,
            hourly_rate: draft.hourly_rate,
            status: ClaimStatus::Pending,
            submitted_at: now,
            updated_at: now,
            notes: draft.notes,
            document_path,
        }
    }

    /// Total salary for the claim, always derived and never stored
    pub fn total_salary(&self) -> Money {
        self.hourly_rate.multiply(self.hours_worked)
    }

    /// Marks the claim approved
    ///
    /// Re-deciding a terminal claim overwrites the previous decision
    /// (last write wins); there is no guard on re-entry.
    pub fn approve(&mut self) {
        self.set_status(ClaimStatus::Approved);
    }

    /// Marks the claim rejected
    pub fn reject(&mut self) {
        self.set_status(ClaimStatus::Rejected);
    }

    /// Rejects the claim with an explanatory note
    pub fn reject_with_note(&mut self, note: impl Into<String>) {
        self.notes = Some(note.into());
        self.set_status(ClaimStatus::Rejected);
    }

    fn set_status(&mut self, status: ClaimStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use core_kernel::Currency;

    fn draft() -> ClaimDraft {
        ClaimDraft {
            lecturer_name: "John Doe".to_string(),
            hours_worked: dec!(10),
            hourly_rate: Money::new(dec!(20), Currency::ZAR),
            notes: None,
        }
    }

    #[test]
    fn test_submit_creates_pending_claim() {
        let lecturer = LecturerId::new();
        let claim = Claim::submit(draft(), lecturer, "/uploads/doc.pdf".to_string());

        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.lecturer_id, lecturer);
        assert_eq!(claim.document_path, "/uploads/doc.pdf");
        assert!(claim.id.to_string().starts_with("CLM-"));
    }

    #[test]
    fn test_total_salary_is_product() {
        let claim = Claim::submit(draft(), LecturerId::new(), "/uploads/doc.pdf".to_string());
        assert_eq!(claim.total_salary().amount(), dec!(200));
    }

    #[test]
    fn test_approve_sets_terminal_status() {
        let mut claim = Claim::submit(draft(), LecturerId::new(), "/uploads/doc.pdf".to_string());
        claim.approve();
        assert_eq!(claim.status, ClaimStatus::Approved);
        assert!(claim.status.is_terminal());
    }

    #[test]
    fn test_reject_with_note_records_reason() {
        let mut claim = Claim::submit(draft(), LecturerId::new(), "/uploads/doc.pdf".to_string());
        claim.reject_with_note("Exceeds the salary ceiling");
        assert_eq!(claim.status, ClaimStatus::Rejected);
        assert_eq!(claim.notes.as_deref(), Some("Exceeds the salary ceiling"));
    }

    #[test]
    fn test_redeciding_overwrites() {
        let mut claim = Claim::submit(draft(), LecturerId::new(), "/uploads/doc.pdf".to_string());
        claim.approve();
        claim.reject();
        assert_eq!(claim.status, ClaimStatus::Rejected);
    }

    #[test]
    fn test_status_string_roundtrip() {
        for status in [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected] {
            let parsed: ClaimStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("Unknown".parse::<ClaimStatus>().is_err());
    }
}
