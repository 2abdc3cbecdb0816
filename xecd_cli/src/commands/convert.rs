use anyhow::Result;
use clap::Args;
use xecd_api::{Client, ConvertFromQuery, ConvertToQuery, Query};

use super::{execute, ConversionArgs, OverrideArgs};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ConvertFromArgs {
    #[command(flatten)]
    pub conversion: ConversionArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

#[derive(Args)]
pub struct ConvertToArgs {
    #[command(flatten)]
    pub conversion: ConversionArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

pub fn build_from_query(args: &ConvertFromArgs) -> Result<ConvertFromQuery> {
    let query = args.conversion.apply(ConvertFromQuery::default())?;
    Ok(query.with_params(&args.overrides.to_params()?))
}

pub fn build_to_query(args: &ConvertToArgs) -> Result<ConvertToQuery> {
    let query = args.conversion.apply(ConvertToQuery::default())?;
    Ok(query.with_params(&args.overrides.to_params()?))
}

pub async fn run_from(
    args: &ConvertFromArgs,
    client: &Client,
    format: &OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let query = build_from_query(args)?;
    execute(&query, client, format, dry_run).await
}

pub async fn run_to(
    args: &ConvertToArgs,
    client: &Client,
    format: &OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let query = build_to_query(args)?;
    execute(&query, client, format, dry_run).await
}
