//! Remote rate service abstraction.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// A full set of quotes relative to the US-Dollar base, keyed by the
/// service's own currency codes.
#[derive(Debug, Clone)]
pub struct RateQuote {
    pub rates: HashMap<String, f64>,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_latest(&self) -> Result<RateQuote>;
}
