use anyhow::Result;
use clap::Args;
use xecd_api::{Client, MonthlyAverageQuery, Query};

use super::{execute, ConversionArgs, OverrideArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct MonthlyAverageArgs {
    /// Year to average over
    #[arg(long)]
    pub year: Option<i32>,

    /// Month, 1-12. Omit for every month of the year
    #[arg(long)]
    pub month: Option<u32>,

    #[command(flatten)]
    pub conversion: ConversionArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

pub fn build_query(args: &MonthlyAverageArgs) -> Result<MonthlyAverageQuery> {
    let mut query = args.conversion.apply(MonthlyAverageQuery::default())?;
    if let Some(year) = args.year {
        query = query.with_year(year);
    }
    if let Some(month) = args.month {
        query = query.with_month(validation::validate_month(month)?);
    }
    Ok(query.with_params(&args.overrides.to_params()?))
}

pub async fn run(
    args: &MonthlyAverageArgs,
    client: &Client,
    format: &OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let query = build_query(args)?;
    execute(&query, client, format, dry_run).await
}
