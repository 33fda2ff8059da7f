//! Derived views over the ledger. Pure filters, no store access.

use chrono::{Duration, NaiveDate};
use shared_types::Ingredient;

/// Records whose expiry date is strictly before `as_of`.
pub fn expired(records: Vec<Ingredient>, as_of: NaiveDate) -> Vec<Ingredient> {
    records.into_iter().filter(|r| r.is_expired(as_of)).collect()
}

/// Records with `as_of <= expiry_date <= as_of + horizon`.
///
/// A negative horizon yields an empty view. A horizon past the calendar's
/// end is clamped to `NaiveDate::MAX`.
pub fn expiring_soon(
    records: Vec<Ingredient>,
    as_of: NaiveDate,
    horizon: Duration,
) -> Vec<Ingredient> {
    if horizon < Duration::zero() {
        return Vec::new();
    }
    let until = as_of
        .checked_add_signed(horizon)
        .unwrap_or(NaiveDate::MAX);

    records
        .into_iter()
        .filter(|r| r.expires_between(as_of, until))
        .collect()
}

/// Records with stock strictly below their warning threshold.
pub fn low_stock(records: Vec<Ingredient>) -> Vec<Ingredient> {
    records.into_iter().filter(Ingredient::is_low_stock).collect()
}
