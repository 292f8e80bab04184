//! PostgreSQL claim store
//!
//! Implements the domain's `ClaimStore` port on a `claims` table. Queries
//! use the runtime SQLx API; rows are mapped through [`ClaimRow`], which
//! mirrors the table layout, before becoming domain claims.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use core_kernel::{ClaimId, Currency, LecturerId, Money};
use domain_claims::{Claim, ClaimStatus, ClaimStore, StoreError};

use crate::error::{classify, DatabaseError};

const SELECT_COLUMNS: &str = "claim_id, lecturer_name, lecturer_id, hours_worked, \
     hourly_rate, currency, status, submitted_at, updated_at, notes, document_path";

/// PostgreSQL-backed claim store
#[derive(Debug, Clone)]
pub struct PgClaimStore {
    pool: PgPool,
}

impl PgClaimStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the `claims` table
#[derive(Debug, sqlx::FromRow)]
struct ClaimRow {
    claim_id: Uuid,
    lecturer_name: String,
    lecturer_id: Uuid,
    hours_worked: Decimal,
    hourly_rate: Decimal,
    currency: String,
    status: String,
    submitted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    notes: Option<String>,
    document_path: String,
}

impl ClaimRow {
    fn into_claim(self) -> Result<Claim, DatabaseError> {
        let currency: Currency = self
            .currency
            .parse()
            .map_err(|e| DatabaseError::corrupt_row("currency", e))?;
        let status: ClaimStatus = self
            .status
            .parse()
            .map_err(|e| DatabaseError::corrupt_row("status", e))?;

        Ok(Claim {
            id: ClaimId::from_uuid(self.claim_id),
            lecturer_name: self.lecturer_name,
            lecturer_id: LecturerId::from_uuid(self.lecturer_id),
            hours_worked: self.hours_worked,
            hourly_rate: Money::new(self.hourly_rate, currency),
            status,
            submitted_at: self.submitted_at,
            updated_at: self.updated_at,
            notes: self.notes,
            document_path: self.document_path,
        })
    }
}

fn into_claims(rows: Vec<ClaimRow>) -> Result<Vec<Claim>, StoreError> {
    rows.into_iter()
        .map(|row| row.into_claim().map_err(StoreError::from))
        .collect()
}

#[async_trait]
impl ClaimStore for PgClaimStore {
    async fn insert(&self, claim: &Claim) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO claims (
                claim_id, lecturer_name, lecturer_id, hours_worked, hourly_rate,
                currency, status, submitted_at, updated_at, notes, document_path
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(claim.id.as_uuid())
        .bind(&claim.lecturer_name)
        .bind(claim.lecturer_id.as_uuid())
        .bind(claim.hours_worked)
        .bind(claim.hourly_rate.amount())
        .bind(claim.hourly_rate.currency().code())
        .bind(claim.status.as_str())
        .bind(claim.submitted_at)
        .bind(claim.updated_at)
        .bind(&claim.notes)
        .bind(&claim.document_path)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::from(classify(e)))?;

        debug!(claim_id = %claim.id, "Claim row inserted");
        Ok(())
    }

    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {} FROM claims WHERE claim_id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from(classify(e)))?;

        row.map(|r| r.into_claim().map_err(StoreError::from))
            .transpose()
    }

    async fn update(&self, claim: &Claim) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE claims
            SET status = $2, notes = $3, updated_at = $4
            WHERE claim_id = $1
            "#,
        )
        .bind(claim.id.as_uuid())
        .bind(claim.status.as_str())
        .bind(&claim.notes)
        .bind(claim.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::from(classify(e)))?;

        debug!(claim_id = %claim.id, status = %claim.status, "Claim row updated");
        Ok(())
    }

    async fn remove(&self, id: ClaimId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM claims WHERE claim_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::from(classify(e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, StoreError> {
        let rows = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {} FROM claims WHERE status = $1 ORDER BY submitted_at ASC",
            SELECT_COLUMNS
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::from(classify(e)))?;

        into_claims(rows)
    }

    async fn list_by_lecturer(&self, lecturer_id: LecturerId) -> Result<Vec<Claim>, StoreError> {
        let rows = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {} FROM claims WHERE lecturer_id = $1 ORDER BY submitted_at ASC",
            SELECT_COLUMNS
        ))
        .bind(lecturer_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::from(classify(e)))?;

        into_claims(rows)
    }

    async fn list_all(&self) -> Result<Vec<Claim>, StoreError> {
        let rows = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {} FROM claims ORDER BY submitted_at ASC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::from(classify(e)))?;

        into_claims(rows)
    }
}
