//! Claims DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::Claim;

/// The text fields of a claim submission
///
/// Arrives as multipart form fields alongside the supporting document;
/// the handler assembles this struct from the parts before validating it.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SubmitClaimFields {
    #[validate(length(min = 1, max = 200, message = "Lecturer name must be 1-200 characters"))]
    pub lecturer_name: String,
    pub hours_worked: Option<Decimal>,
    pub hourly_rate: Option<Decimal>,
    /// ISO 4217 code; defaults to ZAR when absent
    pub currency: Option<String>,
    #[validate(length(max = 1000, message = "Notes are limited to 1000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: String,
    pub lecturer_name: String,
    pub lecturer_id: String,
    pub hours_worked: Decimal,
    pub hourly_rate: Decimal,
    pub currency: String,
    pub total_salary: Decimal,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub document_path: String,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            lecturer_name: claim.lecturer_name.clone(),
            lecturer_id: claim.lecturer_id.to_string(),
            hours_worked: claim.hours_worked,
            hourly_rate: claim.hourly_rate.round_to_currency().amount(),
            currency: claim.hourly_rate.currency().code().to_string(),
            total_salary: claim.total_salary().round_to_currency().amount(),
            status: claim.status.to_string(),
            submitted_at: claim.submitted_at,
            updated_at: claim.updated_at,
            notes: claim.notes,
            document_path: claim.document_path,
        }
    }
}
