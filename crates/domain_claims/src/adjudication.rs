//! Automatic adjudication at submission time
//!
//! Claims whose derived total salary exceeds a fixed ceiling are rejected
//! without ever reaching a reviewer. The ceiling check runs after document
//! validation and before the claim is persisted, so an auto-rejected claim
//! is still stored (as Rejected, with an explanatory note).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};

/// Default salary ceiling above which a claim is auto-rejected
pub fn default_ceiling() -> Money {
    Money::new(dec!(5000), Currency::ZAR)
}

/// Policy that auto-rejects claims over a salary ceiling
#[derive(Debug, Clone)]
pub struct SalaryCeilingPolicy {
    ceiling: Money,
}

impl Default for SalaryCeilingPolicy {
    fn default() -> Self {
        Self {
            ceiling: default_ceiling(),
        }
    }
}

impl SalaryCeilingPolicy {
    pub fn new(ceiling: Money) -> Self {
        Self { ceiling }
    }

    pub fn ceiling(&self) -> Money {
        self.ceiling
    }

    /// Evaluates a submission; returns the rejection note when the derived
    /// total salary exceeds the ceiling, `None` when the claim may proceed
    /// to Pending
    pub fn rejection_note(&self, hours_worked: Decimal, hourly_rate: Money) -> Option<String> {
        let total = hourly_rate.multiply(hours_worked);
        if total.amount() > self.ceiling.amount() {
            Some(format!(
                "Automatically rejected: total salary {} exceeds the ceiling of {}",
                total.round_to_currency(),
                self.ceiling.round_to_currency(),
            ))
        } else {
            None
        }
    }
}
