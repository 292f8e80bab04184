//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_claims::{Claim, ClaimStatus};

/// Asserts the derived-salary invariant on a claim
///
/// # Panics
///
/// Panics if `total_salary()` is not the product of hours and rate
pub fn assert_salary_invariant(claim: &Claim) {
    let expected = claim.hourly_rate.multiply(claim.hours_worked);
    assert_eq!(
        claim.total_salary(),
        expected,
        "Total salary {} is not hours {} x rate {}",
        claim.total_salary(),
        claim.hours_worked,
        claim.hourly_rate
    );
}

/// Asserts a claim is in the expected status
pub fn assert_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status, expected,
        "Claim {} is {}, expected {}",
        claim.id, claim.status, expected
    );
}

/// Asserts two Money values are equal with a currency-aware message
pub fn assert_money_eq(actual: Money, expected: Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Amounts differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts a rendered CSV has the expected number of lines (header + rows)
pub fn assert_csv_line_count(csv: &str, rows: usize) {
    let lines = csv.trim_end().lines().count();
    assert_eq!(
        lines,
        rows + 1,
        "Expected {} rows plus a header, found {} lines:\n{}",
        rows,
        lines,
        csv
    );
}
