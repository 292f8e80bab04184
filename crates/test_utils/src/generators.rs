//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{ClaimId, Currency, LecturerId, Money};
use domain_claims::{Claim, ClaimStatus};

/// Strategy for hours worked (0.00 to 744.00, two decimal places)
pub fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..74_400i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for hourly rates (R0.01 to R1000.00)
pub fn rate_strategy() -> impl Strategy<Value = Money> {
    (1i64..100_000i64).prop_map(|n| Money::new(Decimal::new(n, 2), Currency::ZAR))
}

/// Strategy for claim statuses
pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

/// Strategy for lecturer names, including names with embedded delimiters
pub fn lecturer_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}",
        // Surname-first form exercises CSV quoting
        "[A-Z][a-z]{2,10}, [A-Z][a-z]{2,10}",
    ]
}

/// Strategy for submission timestamps within 2025
pub fn submitted_at_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..365i64).prop_map(|days| {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::days(days)
    })
}

/// Strategy for ClaimId
pub fn claim_id_strategy() -> impl Strategy<Value = ClaimId> {
    any::<[u8; 16]>().prop_map(|bytes| ClaimId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for LecturerId
pub fn lecturer_id_strategy() -> impl Strategy<Value = LecturerId> {
    any::<[u8; 16]>().prop_map(|bytes| LecturerId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for whole claims
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        claim_id_strategy(),
        lecturer_name_strategy(),
        lecturer_id_strategy(),
        hours_strategy(),
        rate_strategy(),
        status_strategy(),
        submitted_at_strategy(),
    )
        .prop_map(|(id, name, lecturer_id, hours, rate, status, submitted_at)| Claim {
            id,
            lecturer_name: name,
            lecturer_id,
            hours_worked: hours,
            hourly_rate: rate,
            status,
            submitted_at,
            updated_at: submitted_at,
            notes: None,
            document_path: "/uploads/timesheet.pdf".to_string(),
        })
}
