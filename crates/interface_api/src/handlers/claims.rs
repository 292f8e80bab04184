//! Claims handlers

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use core_kernel::{ClaimId, Currency, Money};
use domain_claims::{ClaimDraft, DocumentUpload, Principal};

use crate::dto::claims::{ClaimResponse, SubmitClaimFields};
use crate::error::ApiError;
use crate::AppState;

/// Submits a new claim with its supporting document
///
/// Expects multipart form data: text fields `lecturer_name`, `hours_worked`,
/// `hourly_rate` plus optional `currency` and `notes`, and a `document`
/// file part.
pub async fn submit_claim(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let mut fields = SubmitClaimFields::default();
    let mut upload: Option<DocumentUpload> = None;

    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let name = part.name().unwrap_or_default().to_string();
        match name.as_str() {
            "document" => {
                let file_name = part.file_name().unwrap_or_default().to_string();
                let bytes = part
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Unreadable document part: {}", e)))?;
                upload = Some(DocumentUpload::new(file_name, bytes.to_vec()));
            }
            "lecturer_name" => fields.lecturer_name = text(part, "lecturer_name").await?,
            "hours_worked" => {
                fields.hours_worked = Some(parse_decimal(&text(part, "hours_worked").await?, "hours_worked")?)
            }
            "hourly_rate" => {
                fields.hourly_rate = Some(parse_decimal(&text(part, "hourly_rate").await?, "hourly_rate")?)
            }
            "currency" => fields.currency = Some(text(part, "currency").await?),
            "notes" => fields.notes = Some(text(part, "notes").await?),
            // Unknown parts are ignored
            _ => {}
        }
    }

    fields
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let hours = fields
        .hours_worked
        .ok_or_else(|| ApiError::BadRequest("Missing field 'hours_worked'".to_string()))?;
    let rate = fields
        .hourly_rate
        .ok_or_else(|| ApiError::BadRequest("Missing field 'hourly_rate'".to_string()))?;
    if hours <= rust_decimal::Decimal::ZERO {
        return Err(ApiError::Validation("Hours worked must be positive".to_string()));
    }
    if rate <= rust_decimal::Decimal::ZERO {
        return Err(ApiError::Validation("Hourly rate must be positive".to_string()));
    }

    let currency = match fields.currency.as_deref() {
        None | Some("") => Currency::ZAR,
        Some(code) => code
            .parse()
            .map_err(|_| ApiError::Validation(format!("Unknown currency '{}'", code)))?,
    };

    let upload = upload
        .ok_or_else(|| ApiError::BadRequest("Missing 'document' file part".to_string()))?;

    let draft = ClaimDraft {
        lecturer_name: fields.lecturer_name,
        hours_worked: hours,
        hourly_rate: Money::new(rate, currency),
        notes: fields.notes,
    };

    let claim = state.service.submit(&principal, draft, upload).await?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Lists pending claims for the review queue
pub async fn list_pending(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.service.list_pending(&principal).await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// Lists the caller's own claims
pub async fn list_mine(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.service.list_own(&principal).await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// Lists every claim
pub async fn list_all(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.service.list_all(&principal).await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// Approves a claim
pub async fn approve_claim(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = parse_claim_id(&id)?;
    let claim = state.service.approve(&principal, id).await?;
    Ok(Json(claim.into()))
}

/// Rejects a claim
pub async fn reject_claim(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = parse_claim_id(&id)?;
    let claim = state.service.reject(&principal, id).await?;
    Ok(Json(claim.into()))
}

/// Deletes a claim
pub async fn delete_claim(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_claim_id(&id)?;
    state.service.delete(&principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_claim_id(raw: &str) -> Result<ClaimId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid claim id '{}'", raw)))
}

fn parse_decimal(raw: &str, field: &str) -> Result<rust_decimal::Decimal, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("Field '{}' is not a valid number", field)))
}

async fn text(part: axum::extract::multipart::Field<'_>, name: &str) -> Result<String, ApiError> {
    part.text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Unreadable field '{}': {}", name, e)))
}
