//! Flows behind the `convert` and `quick` commands.

use anyhow::Result;
use tracing::warn;

use crate::convert::{convert, try_convert};
use crate::currency::Currency;
use crate::market;
use crate::rate_provider::RateProvider;
use crate::store::RateStore;
use crate::ui;

/// Parses and validates a user-supplied amount. Anything that is not a
/// positive finite number is rejected here, before the converter runs.
pub fn parse_amount(input: &str) -> Option<f64> {
    let amount: f64 = input.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

async fn refresh_or_warn(store: &mut RateStore, provider: &dyn RateProvider) {
    if let Err(e) = market::refresh(store, provider).await {
        warn!(error = %e, "Failed to fetch live rates, converting with stored rates");
    }
}

/// The primary converter: prints the result with its currency code.
pub async fn run_convert(
    store: &mut RateStore,
    provider: &dyn RateProvider,
    amount: &str,
    from: Currency,
    to: Currency,
    swap: bool,
    strict: bool,
) -> Result<()> {
    refresh_or_warn(store, provider).await;

    let Some(amount) = parse_amount(amount) else {
        println!(
            "{}",
            ui::style_text("Please enter a valid amount", ui::StyleType::Error)
        );
        return Ok(());
    };

    let (from, to) = if swap { (to, from) } else { (from, to) };

    if strict {
        match try_convert(store, amount, from, to) {
            Ok(result) => println!("{result:.2} {to}"),
            Err(e) => println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error)),
        }
        return Ok(());
    }

    let result = convert(store, amount, from, to);
    println!("{result:.2} {to}");
    Ok(())
}

/// The quick converter: prints only the numeric result.
pub async fn run_quick(
    store: &mut RateStore,
    provider: &dyn RateProvider,
    amount: &str,
    from: Currency,
    to: Currency,
) -> Result<()> {
    refresh_or_warn(store, provider).await;

    let Some(amount) = parse_amount(amount) else {
        println!("{}", ui::style_text("Invalid amount", ui::StyleType::Error));
        return Ok(());
    };

    let result = convert(store, amount, from, to);
    println!("{result:.2}");
    Ok(())
}
