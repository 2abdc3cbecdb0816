use anyhow::{bail, Result};
use clap::Args;
use xecd_api::{Client, HistoricRatePeriodQuery, HistoricRateQuery, Query};

use super::{execute, ConversionArgs, OverrideArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct HistoricRateArgs {
    /// Date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Time of day in UTC, HH:MM
    #[arg(long)]
    pub time: String,

    #[command(flatten)]
    pub conversion: ConversionArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

#[derive(Args)]
pub struct HistoricRatePeriodArgs {
    /// Start of the range, YYYY-MM-DDTHH:MM or YYYY-MM-DD
    #[arg(long)]
    pub start: Option<String>,

    /// End of the range, YYYY-MM-DDTHH:MM or YYYY-MM-DD
    #[arg(long)]
    pub end: Option<String>,

    /// Interval between data points
    #[arg(long, default_value = "DAILY")]
    pub interval: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "30")]
    pub per_page: i64,

    #[command(flatten)]
    pub conversion: ConversionArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

pub fn build_rate_query(args: &HistoricRateArgs) -> Result<HistoricRateQuery> {
    let date = validation::validate_date(&args.date)?;
    let time = validation::validate_time(&args.time)?;
    let query = args
        .conversion
        .apply(HistoricRateQuery::at(date.and_time(time)))?;
    Ok(query.with_params(&args.overrides.to_params()?))
}

pub fn build_period_query(args: &HistoricRatePeriodArgs) -> Result<HistoricRatePeriodQuery> {
    let mut query = args.conversion.apply(HistoricRatePeriodQuery::default())?;

    let start = args
        .start
        .as_deref()
        .map(validation::validate_timestamp)
        .transpose()?;
    let end = args
        .end
        .as_deref()
        .map(validation::validate_timestamp)
        .transpose()?;
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            bail!("--start {} is after --end {}", start, end);
        }
    }
    if let Some(start) = start {
        query = query.with_start_timestamp(&start.format("%Y-%m-%dT%H:%M").to_string());
    }
    if let Some(end) = end {
        query = query.with_end_timestamp(&end.format("%Y-%m-%dT%H:%M").to_string());
    }

    Ok(query
        .with_interval(args.interval.trim())
        .with_page(args.page)
        .with_per_page(args.per_page)
        .with_params(&args.overrides.to_params()?))
}

pub async fn run_rate(
    args: &HistoricRateArgs,
    client: &Client,
    format: &OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let query = build_rate_query(args)?;
    execute(&query, client, format, dry_run).await
}

pub async fn run_period(
    args: &HistoricRatePeriodArgs,
    client: &Client,
    format: &OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let query = build_period_query(args)?;
    execute(&query, client, format, dry_run).await
}
