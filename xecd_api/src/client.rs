//! HTTP client for the XECD rates API.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    config::{ClientConfig, ConfigOverrides, Credentials},
    query::{
        AccountInfoQuery, ConvertFromQuery, ConvertToQuery, CurrenciesQuery,
        HistoricRatePeriodQuery, HistoricRateQuery, MonthlyAverageQuery, Query, QueryParams,
        QueryValue, Resource,
    },
    Error,
};

/// Request timeout for every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A fully resolved request: where it goes, what it sends, and as whom.
///
/// Built fresh for every call from the client defaults, the resource
/// defaults and the caller's overrides, in that order.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    pub resource: Resource,
    /// Resource URL without the query string.
    pub url: Url,
    pub params: QueryParams,
    pub auth: Credentials,
}

impl RequestSpec {
    /// Sends this request with different credentials.
    pub fn with_auth(mut self, auth: Credentials) -> Self {
        self.auth = auth;
        self
    }

    /// Sets one more parameter, replacing any existing value.
    pub fn with_param(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// The URL with the non-null parameters appended as its query string.
    pub fn full_url(&self) -> Url {
        self.params.add_to_url(&self.url)
    }
}

/// HTTP client for the XECD rates API.
///
/// Holds one pooled `reqwest::Client`. No method mutates the client, so a
/// single instance can serve concurrent requests.
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the production API with the given credentials.
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(account_id, api_key))
    }

    /// Creates a client, replacing parts of the default configuration.
    pub fn with_overrides(
        account_id: impl Into<String>,
        api_key: impl Into<String>,
        overrides: ConfigOverrides,
    ) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(account_id, api_key).with_overrides(overrides))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Http(e)
            })?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves the request a query would send, without sending it.
    pub fn request_spec<Q: Query>(&self, query: &Q) -> Result<RequestSpec, Error> {
        let resource = query.resource();
        let url = Url::parse(&self.config.resource_url(resource.path())).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        let params = self.config.qs.clone().merged(&query.params());
        Ok(RequestSpec {
            resource,
            url,
            params,
            auth: self.config.auth.clone(),
        })
    }

    /// Performs the GET and returns the decoded body as-is.
    ///
    /// The status code is not checked: any body that parses as JSON is
    /// returned, any body that does not is a [`Error::Decode`].
    pub async fn send(&self, spec: &RequestSpec) -> Result<Value, Error> {
        tracing::debug!(resource = %spec.resource, url = %spec.url, "Sending request");

        let resp = self
            .http
            .get(spec.full_url())
            .basic_auth(&spec.auth.account_id, Some(&spec.auth.api_key))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource {}: {}", spec.resource, e);
                Error::Http(e)
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Http(e)
        })?;

        if !status.is_success() {
            tracing::warn!("{} returned status {}", spec.resource, status);
        }

        // Decode raw bytes: invalid UTF-8 is an error, not a replacement char.
        serde_json::from_slice::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode {
                status: status.as_u16(),
                body: snippet,
                source: e,
            }
        })
    }

    /// Resolves and sends any query.
    pub async fn fetch<Q: Query>(&self, query: &Q) -> Result<Value, Error> {
        let spec = self.request_spec(query)?;
        self.send(&spec).await
    }

    /// Fetches the account details for the configured credentials.
    pub async fn account_info(&self, query: &AccountInfoQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches the list of supported currencies.
    pub async fn currencies(&self, query: &CurrenciesQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Converts an amount from one currency into others at the current rate.
    pub async fn convert_from(&self, query: &ConvertFromQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Converts amounts of other currencies into one currency at the current rate.
    pub async fn convert_to(&self, query: &ConvertToQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches the rate at a given date and time.
    pub async fn historic_rate(&self, query: &HistoricRateQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches rates across a time range.
    pub async fn historic_rate_period(
        &self,
        query: &HistoricRatePeriodQuery,
    ) -> Result<Value, Error> {
        self.fetch(query).await
    }

    /// Fetches monthly average rates.
    pub async fn monthly_average(&self, query: &MonthlyAverageQuery) -> Result<Value, Error> {
        self.fetch(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
