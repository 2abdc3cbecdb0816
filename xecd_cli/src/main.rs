mod commands;
mod config;
mod output;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xecd_api::Client;

use crate::config::ConnectionFlags;
use crate::output::OutputFormat;

const DEFAULT_LOG_DIRECTIVE: &str = "xecd_api=info";

/// `RUST_LOG` when set and valid, otherwise info-level library events.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

#[derive(Parser)]
#[command(name = "xecd")]
#[command(about = "Query exchange rates from the XE Currency Data API")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// XECD account id (default: $XECD_ACCOUNT_ID)
    #[arg(long, global = true)]
    account_id: Option<String>,

    /// XECD API key (default: $XECD_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API root (default: $XECD_BASE_URL, then the production endpoint)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print the request instead of sending it
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show account details
    AccountInfo(commands::account::AccountInfoArgs),
    /// List supported currencies
    Currencies(commands::currencies::CurrenciesArgs),
    /// Convert from one currency into others
    ConvertFrom(commands::convert::ConvertFromArgs),
    /// Convert other currencies into one
    ConvertTo(commands::convert::ConvertToArgs),
    /// Rate at a past date and time
    HistoricRate(commands::historic::HistoricRateArgs),
    /// Rates over a time range
    HistoricRatePeriod(commands::historic::HistoricRatePeriodArgs),
    /// Monthly average rates
    MonthlyAverage(commands::monthly_average::MonthlyAverageArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let config = config::resolve(&ConnectionFlags {
        account_id: cli.account_id.as_deref(),
        api_key: cli.api_key.as_deref(),
        base_url: cli.base_url.as_deref(),
    })?;
    let client = Client::from_config(config)?;
    let dry_run = cli.dry_run;

    match &cli.command {
        Commands::AccountInfo(args) => {
            commands::account::run(args, &client, &format, dry_run).await?
        }
        Commands::Currencies(args) => {
            commands::currencies::run(args, &client, &format, dry_run).await?
        }
        Commands::ConvertFrom(args) => {
            commands::convert::run_from(args, &client, &format, dry_run).await?
        }
        Commands::ConvertTo(args) => {
            commands::convert::run_to(args, &client, &format, dry_run).await?
        }
        Commands::HistoricRate(args) => {
            commands::historic::run_rate(args, &client, &format, dry_run).await?
        }
        Commands::HistoricRatePeriod(args) => {
            commands::historic::run_period(args, &client, &format, dry_run).await?
        }
        Commands::MonthlyAverage(args) => {
            commands::monthly_average::run(args, &client, &format, dry_run).await?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_library_info() {
        assert_eq!(log_filter(None).to_string(), "xecd_api=info");
    }

    #[test]
    fn log_filter_keeps_user_directive() {
        assert_eq!(
            log_filter(Some("xecd_api=debug")).to_string(),
            "xecd_api=debug"
        );
    }

    #[test]
    fn log_filter_falls_back_on_invalid_directive() {
        assert_eq!(log_filter(Some("xecd_api=loud")).to_string(), "xecd_api=info");
    }
}
