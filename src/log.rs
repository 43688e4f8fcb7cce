//! Logging initialization.

use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::SubscriberInitExt};

pub fn init_logging(verbose: bool) {
    let level = if verbose { "cambio=debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time())
        .with(filter)
        .init();
}
