//! Claim domain ports
//!
//! The domain never talks to physical storage directly. [`ClaimStore`]
//! abstracts the durable claims table and [`DocumentStore`] abstracts the
//! durable file storage for uploaded documents. The service receives both
//! as trait objects; adapters live in `infra_db` (PostgreSQL, filesystem)
//! and `test_utils` (in-memory).

use async_trait::async_trait;
use thiserror::Error;

use core_kernel::{ClaimId, LecturerId};

use crate::claim::{Claim, ClaimStatus};

/// Failures from a storage adapter
///
/// Not-found is not a store error: lookups return `Option` and the domain
/// decides how absence is reported.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Write rejected: {0}")]
    WriteRejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable table of claims
#[async_trait]
pub trait ClaimStore: Send + Sync + 'static {
    /// Persists a new claim
    async fn insert(&self, claim: &Claim) -> Result<(), StoreError>;

    /// Looks up a claim by identifier
    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, StoreError>;

    /// Persists a status/notes change to an existing claim
    async fn update(&self, claim: &Claim) -> Result<(), StoreError>;

    /// Removes a claim; returns false when the identifier is unknown
    async fn remove(&self, id: ClaimId) -> Result<bool, StoreError>;

    /// All claims in the given status, oldest submission first
    async fn list_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, StoreError>;

    /// All claims submitted by the given lecturer
    async fn list_by_lecturer(&self, lecturer_id: LecturerId) -> Result<Vec<Claim>, StoreError>;

    /// Every claim in the store
    async fn list_all(&self) -> Result<Vec<Claim>, StoreError>;
}

/// Durable storage for uploaded documents
///
/// Saving under an existing name overwrites the previous file; there is no
/// versioning.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Persists the bytes under a stable path derived from `file_name` and
    /// returns that path for recording on the claim
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError>;
}
