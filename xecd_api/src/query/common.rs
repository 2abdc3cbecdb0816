//! Shared query infrastructure: the [`Query`] trait, [`QueryParams`], [`QueryValue`] and [`Resource`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::Url;

/// The fixed set of XECD endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    AccountInfo,
    Currencies,
    ConvertFrom,
    ConvertTo,
    HistoricRate,
    HistoricRatePeriod,
    MonthlyAverage,
}

impl Resource {
    /// Path of the resource relative to the API root.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::AccountInfo => "account_info.json",
            Resource::Currencies => "currencies.json",
            Resource::ConvertFrom => "convert_from.json",
            Resource::ConvertTo => "convert_to.json",
            Resource::HistoricRate => "historic_rate.json",
            Resource::HistoricRatePeriod => "historic_rate/period.json",
            Resource::MonthlyAverage => "monthly_average.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::AccountInfo => "account_info",
            Resource::Currencies => "currencies",
            Resource::ConvertFrom => "convert_from",
            Resource::ConvertTo => "convert_to",
            Resource::HistoricRate => "historic_rate",
            Resource::HistoricRatePeriod => "historic_rate_period",
            Resource::MonthlyAverage => "monthly_average",
        };
        write!(f, "{}", name)
    }
}

/// A single query parameter value: a primitive or null.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl QueryValue {
    /// Wire representation of the value. `None` for null, which is left out
    /// of the query string entirely.
    pub fn to_query_string(&self) -> Option<String> {
        match self {
            QueryValue::Null => None,
            QueryValue::Bool(b) => Some(b.to_string()),
            QueryValue::Int(i) => Some(i.to_string()),
            QueryValue::Float(f) => Some(f.to_string()),
            QueryValue::Str(s) => Some(s.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, QueryValue::Null)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => QueryValue::Null,
        }
    }
}

/// Flat mapping of query parameter names to values.
///
/// Merging is shallow: an entry from the right-hand side replaces the
/// same-named entry outright.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, QueryValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, returning the value it replaced.
    pub fn insert(&mut self, key: &str, value: impl Into<QueryValue>) -> Option<QueryValue> {
        self.0.insert(key.to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies every entry of `other` over this mapping. Last write wins.
    pub fn merge(&mut self, other: &QueryParams) {
        for (key, value) in other.0.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Like [`QueryParams::merge`], consuming and returning `self`.
    pub fn merged(mut self, other: &QueryParams) -> Self {
        self.merge(other);
        self
    }

    /// Serialized `(key, value)` pairs, null entries skipped.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.to_query_string().map(|s| (k.clone(), s)))
            .collect()
    }

    /// Appends the non-null parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.to_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs.iter());
        }
        url
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParams(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Trait implemented by all query builders. Provides the resource the query
/// targets, its default parameters, and shared override methods.
pub trait Query {
    /// The endpoint this query is sent to.
    fn resource(&self) -> Resource;

    /// Parameters built from the query's resolved values.
    fn default_params(&self) -> QueryParams;

    /// Caller-supplied overrides, applied after the defaults.
    fn overrides(&self) -> &QueryParams;

    /// Returns a mutable reference to the overrides.
    fn overrides_mut(&mut self) -> &mut QueryParams;

    /// Sets a raw query parameter, replacing any default of the same name.
    fn with_param(mut self, key: &str, value: impl Into<QueryValue>) -> Self
    where
        Self: Sized,
    {
        self.overrides_mut().insert(key, value);
        self
    }

    /// Merges a whole mapping of raw parameters into the overrides.
    fn with_params(mut self, params: &QueryParams) -> Self
    where
        Self: Sized,
    {
        self.overrides_mut().merge(params);
        self
    }

    /// Defaults with overrides merged on top.
    fn params(&self) -> QueryParams {
        self.default_params().merged(self.overrides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_value_wire_format() {
        assert_eq!(QueryValue::from(true).to_query_string().as_deref(), Some("true"));
        assert_eq!(QueryValue::from(false).to_query_string().as_deref(), Some("false"));
        assert_eq!(QueryValue::from(1.0).to_query_string().as_deref(), Some("1"));
        assert_eq!(QueryValue::from(55.5).to_query_string().as_deref(), Some("55.5"));
        assert_eq!(QueryValue::from(2017).to_query_string().as_deref(), Some("2017"));
        assert_eq!(QueryValue::from("EUR").to_query_string().as_deref(), Some("EUR"));
        assert_eq!(QueryValue::Null.to_query_string(), None);
    }

    #[test]
    fn option_converts_to_null() {
        let none: Option<i32> = None;
        assert!(QueryValue::from(none).is_null());
        assert_eq!(QueryValue::from(Some(5)), QueryValue::Int(5));
    }

    #[test]
    fn merge_replaces_colliding_and_keeps_others() {
        let mut base: QueryParams = [("from", "USD"), ("to", "*")].into_iter().collect();
        let overrides: QueryParams = [("to", "EUR"), ("extra", "x")].into_iter().collect();
        base.merge(&overrides);

        assert_eq!(base.len(), 3);
        assert_eq!(base.get("from"), Some(&QueryValue::from("USD")));
        assert_eq!(base.get("to"), Some(&QueryValue::from("EUR")));
        assert_eq!(base.get("extra"), Some(&QueryValue::from("x")));
    }

    #[test]
    fn merge_with_null_keeps_the_key() {
        let mut base: QueryParams = [("year", 2017)].into_iter().collect();
        let mut overrides = QueryParams::new();
        overrides.insert("year", QueryValue::Null);
        base.merge(&overrides);

        assert!(base.contains_key("year"));
        assert!(base.to_pairs().is_empty());
    }

    #[test]
    fn add_to_url_skips_nulls() {
        let mut params = QueryParams::new();
        params.insert("amount", 1.0);
        params.insert("start_timestamp", QueryValue::Null);
        let url = params.add_to_url(&Url::parse("https://example.com/v1/x.json").unwrap());
        assert_eq!(url.query(), Some("amount=1"));
    }

    #[test]
    fn add_to_url_without_pairs_leaves_no_query() {
        let url = QueryParams::new().add_to_url(&Url::parse("https://example.com/v1/x.json").unwrap());
        assert_eq!(url.query(), None);
    }

    #[test]
    fn resource_paths() {
        assert_eq!(Resource::HistoricRatePeriod.path(), "historic_rate/period.json");
        assert_eq!(Resource::AccountInfo.to_string(), "account_info");
    }
}
