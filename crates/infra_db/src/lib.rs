//! Infrastructure Storage Layer
//!
//! Concrete adapters for the domain storage ports on PostgreSQL (claims)
//! and the local filesystem (uploaded documents), plus connection pool
//! management.
//!
//! # Architecture
//!
//! The adapters implement the port traits from `domain_claims`; the domain
//! never sees SQLx or filesystem types. Database failures are classified
//! into [`DatabaseError`] before being folded into the port's `StoreError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgClaimStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/claims")).await?;
//! let store = PgClaimStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use repositories::{PgClaimStore, FilesystemDocumentStore};
