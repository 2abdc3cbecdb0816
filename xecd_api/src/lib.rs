//! Client for the XE Currency Data (XECD) exchange rate API.
//!
//! Each resource has a query builder; the [`Client`] resolves it into a
//! [`RequestSpec`], sends it with HTTP Basic auth and hands back the JSON
//! body untouched.
//!
//! ```no_run
//! use xecd_api::{Client, ConversionQuery, ConvertFromQuery};
//!
//! # async fn run() -> Result<(), xecd_api::Error> {
//! let client = Client::new("account-id", "api-key")?;
//! let query = ConvertFromQuery::default().with_to("EUR,CAD").with_amount(55.0);
//! let rates = client.convert_from(&query).await?;
//! println!("{}", rates["to"]);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod errors;
mod query;
pub use self::client::{Client, RequestSpec};
pub use self::config::{ClientConfig, ConfigOverrides, Credentials, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    AccountInfoQuery, Conversion, ConversionQuery, ConvertFromQuery, ConvertToQuery,
    CurrenciesQuery, HistoricRatePeriodQuery, HistoricRateQuery, MonthlyAverageQuery, Query,
    QueryParams, QueryValue, Resource,
};
