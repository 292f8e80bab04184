//! Lecturer Claim Management Domain
//!
//! This crate implements the claim lifecycle from submission through
//! approval or rejection, plus CSV reporting over approved claims.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submit -> Pending -> Approved
//!                   -> Rejected
//! (claims over the salary ceiling are created Rejected directly)
//! ```

pub mod claim;
pub mod document;
pub mod adjudication;
pub mod authorization;
pub mod ports;
pub mod service;
pub mod report;
pub mod error;

pub use claim::{Claim, ClaimDraft, ClaimStatus};
pub use document::{DocumentValidator, DocumentUpload, DocumentError};
pub use adjudication::SalaryCeilingPolicy;
pub use authorization::{Principal, Role};
pub use ports::{ClaimStore, DocumentStore, StoreError};
pub use service::ClaimService;
pub use report::approved_claims_csv;
pub use error::ClaimError;
