//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims-core test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `stores`: In-memory implementations of the storage ports
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod stores;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use stores::*;
pub use assertions::*;
pub use generators::*;
