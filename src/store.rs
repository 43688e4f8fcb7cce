//! Best-known exchange rates, held in memory for the life of the process.

use std::collections::HashMap;
use tracing::debug;

use crate::currency::{BASE_CURRENCY, Currency};

/// Units of each currency per 1 USD. Single writer: the store is built
/// with defaults at startup and overwritten in place by a successful
/// refresh. Entries are only ever inserted or replaced, never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct RateStore {
    rates: HashMap<Currency, f64>,
}

impl RateStore {
    /// An empty store with no rates known yet.
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// The fallback table used until a fetch succeeds.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.rates.insert(Currency::Usd, 1.0);
        store.rates.insert(Currency::Eur, 0.92);
        store.rates.insert(Currency::Syp, 15000.0);
        store.rates.insert(Currency::Egy, 48.0);
        store.rates.insert(Currency::Yin, 0.14);
        store
    }

    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    /// Missing entries surface as NaN so the invalid value propagates
    /// through arithmetic down to the display.
    pub fn rate_or_nan(&self, currency: Currency) -> f64 {
        self.rate(currency).unwrap_or(f64::NAN)
    }

    /// Folds a rate service response into the store. Tracked currencies
    /// present in the response are overwritten; absent ones keep their
    /// prior value. The base currency is pinned to exactly 1.
    pub fn apply(&mut self, api_rates: &HashMap<String, f64>) {
        for currency in Currency::ALL {
            if currency == BASE_CURRENCY {
                self.rates.insert(currency, 1.0);
            } else if let Some(rate) = api_rates.get(currency.api_code()) {
                debug!("Rate update: {currency} = {rate}");
                self.rates.insert(currency, *rate);
            }
        }
    }
}

impl Default for RateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_rates(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_default_rates() {
        let store = RateStore::with_defaults();
        assert_eq!(store.rate(Currency::Usd), Some(1.0));
        assert_eq!(store.rate(Currency::Eur), Some(0.92));
        assert_eq!(store.rate(Currency::Syp), Some(15000.0));
        assert_eq!(store.rate(Currency::Egy), Some(48.0));
        assert_eq!(store.rate(Currency::Yin), Some(0.14));
    }

    #[test]
    fn test_apply_overwrites_only_currencies_in_response() {
        let mut store = RateStore::with_defaults();
        store.apply(&api_rates(&[("EUR", 0.95)]));

        assert_eq!(store.rate(Currency::Eur), Some(0.95));
        // Currencies absent from the response keep their prior value.
        assert_eq!(store.rate(Currency::Syp), Some(15000.0));
        assert_eq!(store.rate(Currency::Egy), Some(48.0));
        assert_eq!(store.rate(Currency::Yin), Some(0.14));
    }

    #[test]
    fn test_apply_maps_service_codes_to_internal_codes() {
        let mut store = RateStore::with_defaults();
        store.apply(&api_rates(&[("EGP", 48.6), ("CNY", 7.24)]));

        assert_eq!(store.rate(Currency::Egy), Some(48.6));
        assert_eq!(store.rate(Currency::Yin), Some(7.24));
    }

    #[test]
    fn test_apply_pins_base_currency_to_one() {
        let mut store = RateStore::with_defaults();
        store.apply(&api_rates(&[("USD", 1.1), ("EUR", 0.95)]));

        assert_eq!(store.rate(Currency::Usd), Some(1.0));
    }

    #[test]
    fn test_apply_ignores_untracked_codes() {
        let mut store = RateStore::new();
        store.apply(&api_rates(&[("GBP", 0.79), ("EUR", 0.95)]));

        assert_eq!(store.rate(Currency::Eur), Some(0.95));
        // GBP is not a tracked currency and creates no entry.
        assert_eq!(store.rate(Currency::Syp), None);
    }

    #[test]
    fn test_apply_on_empty_store_inserts_base() {
        let mut store = RateStore::new();
        store.apply(&api_rates(&[]));

        assert_eq!(store.rate(Currency::Usd), Some(1.0));
        assert_eq!(store.rate(Currency::Eur), None);
    }
}
