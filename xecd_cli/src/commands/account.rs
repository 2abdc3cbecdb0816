use anyhow::Result;
use clap::Args;
use xecd_api::{AccountInfoQuery, Client, Query};

use super::{execute, OverrideArgs};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct AccountInfoArgs {
    #[command(flatten)]
    pub overrides: OverrideArgs,
}

pub fn build_query(args: &AccountInfoArgs) -> Result<AccountInfoQuery> {
    Ok(AccountInfoQuery::default().with_params(&args.overrides.to_params()?))
}

pub async fn run(
    args: &AccountInfoArgs,
    client: &Client,
    format: &OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let query = build_query(args)?;
    execute(&query, client, format, dry_run).await
}
