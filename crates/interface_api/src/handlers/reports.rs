//! Report handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use chrono::Utc;
use tracing::{info, warn};

use domain_claims::Principal;

use crate::error::ApiError;
use crate::AppState;

/// Generates the approved-claims CSV report
///
/// The report is returned as a `text/csv` attachment. A copy is also
/// written to the configured report directory for HR's records; a failure
/// to archive is logged but does not fail the request.
pub async fn approved_claims(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Response, ApiError> {
    let csv = state.service.approved_claims_report(&principal).await?;

    let file_name = format!("approved-claims-{}.csv", Utc::now().format("%Y%m%d-%H%M%S"));
    archive_copy(&state.config.report_dir, &file_name, &csv).await;

    info!(%file_name, size = csv.len(), "Approved-claims report served");
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        csv,
    )
        .into_response())
}

async fn archive_copy(report_dir: &str, file_name: &str, csv: &str) {
    let result: std::io::Result<()> = async {
        tokio::fs::create_dir_all(report_dir).await?;
        let path = std::path::Path::new(report_dir).join(file_name);
        tokio::fs::write(path, csv).await
    }
    .await;

    if let Err(e) = result {
        warn!(%file_name, error = %e, "Failed to archive report copy");
    }
}
