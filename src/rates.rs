//! Flows behind the `rates` table and `pairs` commands.

use anyhow::Result;
use comfy_table::Cell;
use tracing::warn;

use crate::market::{self, MarketSnapshot};
use crate::rate_provider::RateProvider;
use crate::store::RateStore;
use crate::ui;

/// Refreshes the store and returns a snapshot to render. A failed fetch
/// is logged and the stored rates are rendered instead.
async fn refresh_snapshot(store: &mut RateStore, provider: &dyn RateProvider) -> MarketSnapshot {
    let pb = ui::new_spinner("Fetching live rates...");
    let snapshot = match market::refresh(store, provider).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(error = %e, "Failed to fetch live rates, showing stored rates");
            MarketSnapshot::from_store(store)
        }
    };
    pb.finish_and_clear();
    snapshot
}

pub async fn run_rates(store: &mut RateStore, provider: &dyn RateProvider) -> Result<()> {
    let snapshot = refresh_snapshot(store, provider).await;

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell("Rate (USD)"),
        ui::header_cell("Change"),
    ]);

    for row in &snapshot.rows {
        table.add_row(vec![
            Cell::new(row.code),
            Cell::new(row.name),
            ui::rate_cell(row.rate),
            ui::change_cell(row.change_pct),
        ]);
    }

    println!("{}", ui::style_text("Exchange Rates", ui::StyleType::Title));
    println!("{table}");
    println!(
        "{}",
        ui::style_text(
            &format!("Last updated: {}", snapshot.updated_time()),
            ui::StyleType::Subtle
        )
    );

    Ok(())
}

pub async fn run_pairs(store: &mut RateStore, provider: &dyn RateProvider) -> Result<()> {
    let snapshot = refresh_snapshot(store, provider).await;

    println!("{}", ui::style_text("Popular Pairs", ui::StyleType::Title));
    for pair in &snapshot.pairs {
        println!("{}  {:.4}", pair.label, pair.rate);
    }
    println!(
        "{}",
        ui::style_text(
            &format!("Market update: {}", snapshot.updated_time()),
            ui::StyleType::Subtle
        )
    );

    Ok(())
}
