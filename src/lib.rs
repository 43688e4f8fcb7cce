pub mod config;
pub mod convert;
pub mod converter;
pub mod currency;
pub mod log;
pub mod market;
pub mod providers;
pub mod rate_provider;
pub mod rates;
pub mod store;
pub mod ui;

use anyhow::Result;
use tracing::{debug, info};

use crate::currency::Currency;
use crate::store::RateStore;

/// Commands the application can execute, decoupled from the CLI surface.
pub enum AppCommand {
    Convert {
        amount: String,
        from: Currency,
        to: Currency,
        swap: bool,
        strict: bool,
    },
    Quick {
        amount: String,
        from: Currency,
        to: Currency,
    },
    Rates,
    Pairs,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider =
        providers::exchange_rate_api::ExchangeRateApiProvider::new(config.rate_service_url());

    // Every invocation starts from the fallback table; live rates
    // overwrite it when the fetch succeeds.
    let mut store = RateStore::with_defaults();

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            swap,
            strict,
        } => converter::run_convert(&mut store, &provider, &amount, from, to, swap, strict).await,
        AppCommand::Quick { amount, from, to } => {
            converter::run_quick(&mut store, &provider, &amount, from, to).await
        }
        AppCommand::Rates => rates::run_rates(&mut store, &provider).await,
        AppCommand::Pairs => rates::run_pairs(&mut store, &provider).await,
    }
}
