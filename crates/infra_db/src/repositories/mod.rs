//! Storage adapter implementations
//!
//! Each adapter implements one of the domain's storage ports and
//! encapsulates the mapping between physical storage and domain types.

pub mod claims;
pub mod documents;

pub use claims::PgClaimStore;
pub use documents::FilesystemDocumentStore;
