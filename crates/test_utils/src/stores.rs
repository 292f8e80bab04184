//! In-Memory Port Adapters
//!
//! Mock implementations of the storage ports for tests that do not want a
//! real database or filesystem. Both keep their state behind a mutex so a
//! test can inspect what was written.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use core_kernel::{ClaimId, LecturerId};
use domain_claims::{Claim, ClaimStatus, ClaimStore, DocumentStore, StoreError};

/// In-memory claim store
#[derive(Default)]
pub struct InMemoryClaimStore {
    claims: Mutex<HashMap<ClaimId, Claim>>,
    /// When true, every operation fails with `StoreError::Unavailable`
    fail: Mutex<bool>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail, for store-failure paths
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.fail.lock().unwrap() = unavailable;
    }

    /// Snapshot of everything currently stored
    pub fn snapshot(&self) -> Vec<Claim> {
        self.claims.lock().unwrap().values().cloned().collect()
    }

    /// Number of stored claims
    pub fn len(&self) -> usize {
        self.claims.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if *self.fail.lock().unwrap() {
            Err(StoreError::Unavailable("in-memory store set to fail".to_string()))
        } else {
            Ok(())
        }
    }

    fn sorted_by_submission(mut claims: Vec<Claim>) -> Vec<Claim> {
        claims.sort_by_key(|c| c.submitted_at);
        claims
    }
}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn insert(&self, claim: &Claim) -> Result<(), StoreError> {
        self.check_available()?;
        self.claims.lock().unwrap().insert(claim.id, claim.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        self.check_available()?;
        Ok(self.claims.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, claim: &Claim) -> Result<(), StoreError> {
        self.check_available()?;
        self.claims.lock().unwrap().insert(claim.id, claim.clone());
        Ok(())
    }

    async fn remove(&self, id: ClaimId) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.claims.lock().unwrap().remove(&id).is_some())
    }

    async fn list_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, StoreError> {
        self.check_available()?;
        let claims = self
            .claims
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect();
        Ok(Self::sorted_by_submission(claims))
    }

    async fn list_by_lecturer(&self, lecturer_id: LecturerId) -> Result<Vec<Claim>, StoreError> {
        self.check_available()?;
        let claims = self
            .claims
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.lecturer_id == lecturer_id)
            .cloned()
            .collect();
        Ok(Self::sorted_by_submission(claims))
    }

    async fn list_all(&self) -> Result<Vec<Claim>, StoreError> {
        self.check_available()?;
        Ok(Self::sorted_by_submission(
            self.claims.lock().unwrap().values().cloned().collect(),
        ))
    }
}

/// In-memory document store
#[derive(Default)]
pub struct InMemoryDocumentStore {
    saved: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// File names saved so far
    pub fn saved_names(&self) -> Vec<String> {
        self.saved.lock().unwrap().keys().cloned().collect()
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError> {
        self.saved
            .lock()
            .unwrap()
            .insert(file_name.to_string(), bytes.to_vec());
        Ok(format!("/uploads/{}", file_name))
    }
}
