use anyhow::Result;
use clap::Args;
use xecd_api::{Client, CurrenciesQuery, Query};

use super::{execute, OverrideArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct CurrenciesArgs {
    /// Include obsolete currencies
    #[arg(long)]
    pub obsolete: bool,

    /// Language for currency names
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Comma-separated ISO codes to list (e.g. USD,EUR). Default: all
    #[arg(long, default_value = "*")]
    pub iso: String,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

pub fn build_query(args: &CurrenciesArgs) -> Result<CurrenciesQuery> {
    let iso = validation::validate_currency_list(&args.iso)?;
    let codes: Vec<&str> = iso.split(',').collect();
    Ok(CurrenciesQuery::default()
        .with_obsolete(args.obsolete)
        .with_language(args.language.trim())
        .with_iso(&codes)
        .with_params(&args.overrides.to_params()?))
}

pub async fn run(
    args: &CurrenciesArgs,
    client: &Client,
    format: &OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let query = build_query(args)?;
    execute(&query, client, format, dry_run).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use xecd_api::QueryValue;

    fn args(iso: &str) -> CurrenciesArgs {
        CurrenciesArgs {
            obsolete: false,
            language: "en".to_string(),
            iso: iso.to_string(),
            overrides: Default::default(),
        }
    }

    #[test]
    fn iso_list_is_normalized() {
        let params = build_query(&args("usd,eur")).unwrap().params();
        assert_eq!(params.get("iso"), Some(&QueryValue::from("USD,EUR")));
    }

    #[test]
    fn bad_iso_is_rejected() {
        assert!(build_query(&args("USD,EURO")).is_err());
    }
}
