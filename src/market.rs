//! Refresh flow and the display-facing snapshot derived from it.

use anyhow::Result;
use chrono::{DateTime, Local};
use rand::Rng;
use tracing::debug;

use crate::currency::Currency;
use crate::rate_provider::{RateProvider, RateQuote};
use crate::store::RateStore;

/// Fixed display list for the rates table, in service codes.
const DISPLAY_CURRENCIES: [(&str, &str); 7] = [
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
    ("JPY", "Japanese Yen"),
    ("CNY", "Chinese Yuan"),
    ("EGP", "Egyptian Pound"),
    ("SYP", "Syrian Pound"),
];

/// Fixed sidebar pairs; each displays the quoted rate of its target code.
const POPULAR_PAIRS: [(&str, &str); 4] = [
    ("USD/EUR", "EUR"),
    ("USD/GBP", "GBP"),
    ("EUR/JPY", "JPY"),
    ("USD/CNY", "CNY"),
];

#[derive(Debug, Clone)]
pub struct RateRow {
    pub code: &'static str,
    pub name: &'static str,
    pub rate: f64,
    /// Decoration only, see [`cosmetic_daily_change`].
    pub change_pct: f64,
}

#[derive(Debug, Clone)]
pub struct PairQuote {
    pub label: &'static str,
    pub rate: f64,
}

/// Everything the presentation layer renders after a refresh: table
/// rows, sidebar pairs and the time the data was obtained.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub rows: Vec<RateRow>,
    pub pairs: Vec<PairQuote>,
    pub updated_at: DateTime<Local>,
}

impl MarketSnapshot {
    /// Builds the snapshot from the raw service response. Display
    /// currencies absent from the response get no row.
    pub fn from_quote(quote: &RateQuote) -> Self {
        let rows = DISPLAY_CURRENCIES
            .into_iter()
            .filter_map(|(code, name)| {
                quote.rates.get(code).map(|rate| RateRow {
                    code,
                    name,
                    rate: *rate,
                    change_pct: cosmetic_daily_change(),
                })
            })
            .collect();

        let pairs = POPULAR_PAIRS
            .into_iter()
            .filter_map(|(label, code)| {
                quote
                    .rates
                    .get(code)
                    .map(|rate| PairQuote { label, rate: *rate })
            })
            .collect();

        MarketSnapshot {
            rows,
            pairs,
            updated_at: Local::now(),
        }
    }

    /// Fallback snapshot from the store's current values, used when no
    /// live data could be fetched.
    pub fn from_store(store: &RateStore) -> Self {
        let rows = Currency::ALL
            .into_iter()
            .filter_map(|currency| {
                store.rate(currency).map(|rate| RateRow {
                    code: currency.code(),
                    name: currency.name(),
                    rate,
                    change_pct: cosmetic_daily_change(),
                })
            })
            .collect();

        let pairs = POPULAR_PAIRS
            .into_iter()
            .filter_map(|(label, code)| {
                Currency::from_api_code(code)
                    .and_then(|c| store.rate(c))
                    .map(|rate| PairQuote { label, rate })
            })
            .collect();

        MarketSnapshot {
            rows,
            pairs,
            updated_at: Local::now(),
        }
    }

    pub fn updated_time(&self) -> String {
        self.updated_at.format("%H:%M:%S").to_string()
    }
}

/// Decoration for the table's "change" column. The upstream service
/// quotes no daily movement, so each render draws a fresh value in
/// [-1, 1]. This is not market data and is never stored.
fn cosmetic_daily_change() -> f64 {
    rand::thread_rng().gen_range(-1.0..=1.0)
}

/// Fetches the latest quotes once and folds them into the store. On any
/// failure the store is left untouched and the error is returned for
/// the caller to log; there is no retry.
pub async fn refresh(
    store: &mut RateStore,
    provider: &dyn RateProvider,
) -> Result<MarketSnapshot> {
    let quote = provider.fetch_latest().await?;
    store.apply(&quote.rates);
    debug!("Live rates loaded: {store:?}");
    Ok(MarketSnapshot::from_quote(&quote))
}
