//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Currency, LecturerId, Money};
use domain_claims::{Claim, ClaimStatus};

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    id: ClaimId,
    lecturer_name: String,
    lecturer_id: LecturerId,
    hours_worked: Decimal,
    hourly_rate: Money,
    status: ClaimStatus,
    submitted_at: DateTime<Utc>,
    notes: Option<String>,
    document_path: String,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a builder with a modest pending claim as the default
    pub fn new() -> Self {
        Self {
            id: ClaimId::new_v7(),
            lecturer_name: "John Doe".to_string(),
            lecturer_id: LecturerId::new(),
            hours_worked: dec!(10),
            hourly_rate: Money::new(dec!(20), Currency::ZAR),
            status: ClaimStatus::Pending,
            submitted_at: Utc::now(),
            notes: None,
            document_path: "/uploads/timesheet.pdf".to_string(),
        }
    }

    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    pub fn with_lecturer_name(mut self, name: impl Into<String>) -> Self {
        self.lecturer_name = name.into();
        self
    }

    pub fn with_lecturer_id(mut self, id: LecturerId) -> Self {
        self.lecturer_id = id;
        self
    }

    pub fn with_hours(mut self, hours: Decimal) -> Self {
        self.hours_worked = hours;
        self
    }

    pub fn with_rate(mut self, rate: Money) -> Self {
        self.hourly_rate = rate;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_at = at;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_document_path(mut self, path: impl Into<String>) -> Self {
        self.document_path = path.into();
        self
    }

    /// Shorthand for an approved claim
    pub fn approved(self) -> Self {
        self.with_status(ClaimStatus::Approved)
    }

    /// Shorthand for a rejected claim
    pub fn rejected(self) -> Self {
        self.with_status(ClaimStatus::Rejected)
    }

    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            lecturer_name: self.lecturer_name,
            lecturer_id: self.lecturer_id,
            hours_worked: self.hours_worked,
            hourly_rate: self.hourly_rate,
            status: self.status,
            submitted_at: self.submitted_at,
            updated_at: self.submitted_at,
            notes: self.notes,
            document_path: self.document_path,
        }
    }
}
