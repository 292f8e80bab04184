//! Core Kernel - Foundational types and utilities for the claim management system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Common error types

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{ClaimId, LecturerId};
pub use error::CoreError;
