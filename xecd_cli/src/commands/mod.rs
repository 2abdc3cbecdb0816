//! CLI subcommand implementations, one per API resource.

pub mod account;
pub mod convert;
pub mod currencies;
pub mod historic;
pub mod monthly_average;

use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};
use xecd_api::{Client, ConversionQuery, Query, QueryParams, RequestSpec};

use crate::output::{print_json, print_response, OutputFormat};
use crate::validation;

/// Raw parameter overrides accepted by every subcommand.
#[derive(Args, Default)]
pub struct OverrideArgs {
    /// Extra or replacement query parameter, e.g. --param margin=0.5 (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

impl OverrideArgs {
    pub fn to_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::new();
        for raw in self.params.iter() {
            let (key, value) = validation::parse_param(raw)?;
            params.insert(&key, value);
        }
        Ok(params)
    }
}

/// Currency pair, amount and flags shared by the rate subcommands. Unset
/// currencies keep the resource's default.
#[derive(Args, Default)]
pub struct ConversionArgs {
    /// Source currency code, comma list, or '*'
    #[arg(long)]
    pub from: Option<String>,

    /// Target currency code, comma list, or '*'
    #[arg(long)]
    pub to: Option<String>,

    /// Amount to convert
    #[arg(long, default_value = "1")]
    pub amount: f64,

    /// Include obsolete currencies
    #[arg(long)]
    pub obsolete: bool,

    /// Also return inverse rates
    #[arg(long)]
    pub inverse: bool,
}

impl ConversionArgs {
    pub fn apply<Q: ConversionQuery>(&self, mut query: Q) -> Result<Q> {
        if let Some(from) = &self.from {
            query = query.with_from(&validation::validate_currency_list(from)?);
        }
        if let Some(to) = &self.to {
            query = query.with_to(&validation::validate_currency_list(to)?);
        }
        Ok(query
            .with_amount(validation::validate_amount(self.amount)?)
            .with_obsolete(self.obsolete)
            .with_inverse(self.inverse))
    }
}

/// What `--dry-run` prints: the resource, the URL as it would go on the wire,
/// and every parameter including the null ones left off the URL.
pub fn dry_run_doc(spec: &RequestSpec) -> Value {
    json!({
        "resource": spec.resource.to_string(),
        "url": spec.full_url().to_string(),
        "params": spec.params,
    })
}

/// Sends a query and prints the response, or with `dry_run` prints the
/// request that would have been sent.
pub async fn execute<Q: Query>(
    query: &Q,
    client: &Client,
    format: &OutputFormat,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        print_json(&dry_run_doc(&client.request_spec(query)?));
        return Ok(());
    }
    let resp = client.fetch(query).await?;
    print_response(&resp, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xecd_api::MonthlyAverageQuery;

    fn client() -> Client {
        Client::new("accountId", "apiKey").unwrap()
    }

    #[test]
    fn dry_run_doc_shows_serialized_url() {
        let query = MonthlyAverageQuery::default()
            .with_to("EUR")
            .with_param("margin", 2);
        let doc = dry_run_doc(&client().request_spec(&query).unwrap());

        assert_eq!(doc["resource"], "monthly_average");
        let url = doc["url"].as_str().unwrap();
        assert!(url.starts_with("https://xecdapi.xe.com/v1/monthly_average.json?"));
        assert!(url.contains("to=EUR"));
        assert!(url.contains("amount=1"));
        assert!(url.contains("margin=2"));
        assert_eq!(doc["params"]["margin"], 2);
    }

    #[test]
    fn dry_run_doc_lists_null_params_but_keeps_them_off_the_url() {
        let doc = dry_run_doc(
            &client()
                .request_spec(&MonthlyAverageQuery::default())
                .unwrap(),
        );

        let params = doc["params"].as_object().unwrap();
        assert!(params["year"].is_null());
        assert!(params["month"].is_null());
        let url = doc["url"].as_str().unwrap();
        assert!(!url.contains("year="));
        assert!(!url.contains("month="));
    }

    #[test]
    fn dry_run_doc_never_carries_the_api_key() {
        let doc = dry_run_doc(
            &client()
                .request_spec(&MonthlyAverageQuery::default())
                .unwrap(),
        );
        assert!(!doc.to_string().contains("apiKey"));
    }
}
