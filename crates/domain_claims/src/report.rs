//! CSV reporting over approved claims

use thiserror::Error;

use crate::claim::{Claim, ClaimStatus};

/// Column order of the approved-claims report
pub const REPORT_HEADER: [&str; 6] = [
    "ClaimId",
    "LecturerName",
    "HoursWorked",
    "HourlyRate",
    "TotalSalary",
    "SubmissionDate",
];

/// Errors that can occur while rendering a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV rendering failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Report is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Renders the approved claims as a CSV document
///
/// One header line plus one row per approved claim; submission dates are
/// formatted `yyyy-MM-dd` and amounts at two decimal places. Claims not in
/// the Approved state are skipped. Free-text fields are quoted by the CSV
/// writer, so lecturer names containing delimiters are safe.
pub fn approved_claims_csv(claims: &[Claim]) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(REPORT_HEADER)?;

    for claim in claims.iter().filter(|c| c.status == ClaimStatus::Approved) {
        writer.write_record([
            claim.id.to_string(),
            claim.lecturer_name.clone(),
            claim.hours_worked.to_string(),
            claim.hourly_rate.round_to_currency().amount().to_string(),
            claim.total_salary().round_to_currency().amount().to_string(),
            claim.submitted_at.format("%Y-%m-%d").to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}
