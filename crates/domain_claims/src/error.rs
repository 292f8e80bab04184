//! Claim domain errors

use thiserror::Error;

use core_kernel::ClaimId;

use crate::authorization::Role;
use crate::document::DocumentError;
use crate::ports::StoreError;
use crate::report::ReportError;

/// Errors that can occur in the claim domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    NotFound(ClaimId),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Access denied: requires one of {required:?}")]
    Forbidden { required: Vec<Role> },

    #[error("Store failure: {0}")]
    Store(#[from] StoreError),

    #[error("Report failure: {0}")]
    Report(#[from] ReportError),
}

impl ClaimError {
    pub fn forbidden(required: &[Role]) -> Self {
        ClaimError::Forbidden {
            required: required.to_vec(),
        }
    }

    /// True if the error is a rejection of the caller's input rather than
    /// a system fault
    pub fn is_validation(&self) -> bool {
        matches!(self, ClaimError::Document(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClaimError::NotFound(_))
    }
}
