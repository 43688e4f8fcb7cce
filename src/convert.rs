//! Pure conversion through the US-Dollar base.

use anyhow::{Result, anyhow};

use crate::currency::Currency;
use crate::store::RateStore;

/// Converts `amount` between two currencies by normalizing into USD and
/// multiplying out. No rounding happens here; formatting is the
/// presentation layer's concern. A rate missing from the store enters
/// the arithmetic as NaN and propagates to the result.
pub fn convert(store: &RateStore, amount: f64, from: Currency, to: Currency) -> f64 {
    let in_usd = amount / store.rate_or_nan(from);
    in_usd * store.rate_or_nan(to)
}

/// Strict variant of [`convert`] for callers that prefer an error over
/// a NaN result when a rate is unknown.
pub fn try_convert(store: &RateStore, amount: f64, from: Currency, to: Currency) -> Result<f64> {
    let from_rate = store
        .rate(from)
        .ok_or_else(|| anyhow!("No rate available for currency: {from}"))?;
    let to_rate = store
        .rate(to)
        .ok_or_else(|| anyhow!("No rate available for currency: {to}"))?;
    Ok(amount / from_rate * to_rate)
}
