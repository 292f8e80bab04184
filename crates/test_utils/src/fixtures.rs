//! Test Fixtures
//!
//! Pre-built test data for common entities. Fixtures use fixed, readable
//! values so failures are easy to interpret; use the builders when a test
//! needs to vary a field.

use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

use core_kernel::{Currency, LecturerId, Money};
use domain_claims::{ClaimDraft, DocumentUpload, Principal, Role};

/// Fixtures for money values
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical hourly rate
    pub fn hourly_rate() -> Money {
        Money::new(dec!(20), Currency::ZAR)
    }

    /// A rate that puts a full-time month over the salary ceiling
    pub fn excessive_rate() -> Money {
        Money::new(dec!(50), Currency::ZAR)
    }

    /// The default salary ceiling
    pub fn ceiling() -> Money {
        Money::new(dec!(5000), Currency::ZAR)
    }
}

/// Fixtures for principals in each role
pub struct PrincipalFixtures;

impl PrincipalFixtures {
    pub fn lecturer() -> Principal {
        Principal::new(LecturerId::new(), "John Doe", vec![Role::Lecturer])
    }

    pub fn lecturer_with_id(id: LecturerId) -> Principal {
        Principal::new(id, "John Doe", vec![Role::Lecturer])
    }

    pub fn coordinator() -> Principal {
        Principal::new(LecturerId::new(), "Carol Coordinator", vec![Role::Coordinator])
    }

    pub fn manager() -> Principal {
        Principal::new(LecturerId::new(), "Mandla Manager", vec![Role::Manager])
    }

    pub fn hr() -> Principal {
        Principal::new(LecturerId::new(), "Hannah HR", vec![Role::Hr])
    }

    /// A principal with a randomly generated name and the given roles
    pub fn with_roles(roles: Vec<Role>) -> Principal {
        let name: String = Name().fake();
        Principal::new(LecturerId::new(), name, roles)
    }
}

/// Fixtures for claim drafts and uploads
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A modest draft well under the salary ceiling (10h x R20 = R200)
    pub fn modest_draft() -> ClaimDraft {
        ClaimDraft {
            lecturer_name: "John Doe".to_string(),
            hours_worked: dec!(10),
            hourly_rate: MoneyFixtures::hourly_rate(),
            notes: None,
        }
    }

    /// A draft over the salary ceiling (300h x R50 = R15000)
    pub fn excessive_draft() -> ClaimDraft {
        ClaimDraft {
            lecturer_name: "Jane Doe".to_string(),
            hours_worked: dec!(300),
            hourly_rate: MoneyFixtures::excessive_rate(),
            notes: None,
        }
    }

    /// A small valid PDF upload
    pub fn pdf_upload() -> DocumentUpload {
        DocumentUpload::new("timesheet.pdf", b"%PDF-1.4 test".to_vec())
    }

    /// An upload with a disallowed extension
    pub fn exe_upload() -> DocumentUpload {
        DocumentUpload::new("payload.exe", b"MZ".to_vec())
    }

    /// An upload with no content
    pub fn empty_upload() -> DocumentUpload {
        DocumentUpload::new("empty.pdf", Vec::new())
    }
}
