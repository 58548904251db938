//! Conversion between in-process amounts and their stored representation.
//!
//! Amounts are persisted as integer minor units (cents). In process they are
//! [`Decimal`]s with a scale of two.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::error::{Result, SalesError};

/// Converts an amount into cents, rounding half away from zero.
///
/// # Errors
///
/// Returns `SalesError::InvalidInput` if the amount in cents does not fit
/// the stored integer.
pub fn amount_to_cents(amount: Decimal) -> Result<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| {
            SalesError::invalid_input("amount").with_reason(format!("{amount} is out of range"))
        })
}

/// Converts stored cents back into an amount with two decimal places.
pub fn amount_from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
