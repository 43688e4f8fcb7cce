use anyhow::Result;
use cambio::currency::Currency;
use cambio::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for cambio::AppCommand {
    fn from(cmd: Commands) -> cambio::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                swap,
                strict,
            } => cambio::AppCommand::Convert {
                amount,
                from,
                to,
                swap,
                strict,
            },
            Commands::Quick { amount, from, to } => cambio::AppCommand::Quick { amount, from, to },
            Commands::Rates => cambio::AppCommand::Rates,
            Commands::Pairs => cambio::AppCommand::Pairs,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        amount: String,
        /// Source currency code
        from: Currency,
        /// Destination currency code
        to: Currency,
        /// Exchange source and destination currencies
        #[arg(short, long)]
        swap: bool,
        /// Report missing rates as errors instead of printing NaN
        #[arg(long)]
        strict: bool,
    },
    /// Convert and print only the numeric result
    Quick {
        /// Amount to convert
        amount: String,
        /// Source currency code
        from: Currency,
        /// Destination currency code
        to: Currency,
    },
    /// Display the exchange rate table
    Rates,
    /// Display popular currency pairs
    Pairs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => cambio::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = cambio::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
providers:
  exchange_rate_api:
    base_url: "https://api.exchangerate-api.com"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
