//! Conversion parameters shared by the rate resources, plus the
//! `convert_from` and `convert_to` queries.

use super::common::{Query, QueryParams, Resource};

/// Currency pair, amount and flags common to every rate lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    /// Source currency code, or `*` for all currencies. Comma-separated lists are allowed.
    pub from: String,
    /// Target currency code, or `*` for all currencies. Comma-separated lists are allowed.
    pub to: String,
    pub amount: f64,
    /// Include obsolete currencies.
    pub obsolete: bool,
    /// Also return the inverse rate.
    pub inverse: bool,
}

impl Default for Conversion {
    fn default() -> Conversion {
        Conversion {
            from: "USD".to_string(),
            to: "*".to_string(),
            amount: 1.0,
            obsolete: false,
            inverse: false,
        }
    }
}

impl Conversion {
    /// Defaults for `convert_to`: into USD from every currency.
    pub fn reverse() -> Conversion {
        Conversion {
            from: "*".to_string(),
            to: "USD".to_string(),
            ..Conversion::default()
        }
    }

    /// Writes the five conversion keys into `params`.
    pub fn insert_into(&self, params: &mut QueryParams) {
        params.insert("from", self.from.as_str());
        params.insert("to", self.to.as_str());
        params.insert("amount", self.amount);
        params.insert("obsolete", self.obsolete);
        params.insert("inverse", self.inverse);
    }
}

fn join_codes<S: AsRef<str>>(codes: &[S]) -> String {
    codes
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Builder methods for queries that carry a [`Conversion`].
pub trait ConversionQuery: Query {
    /// Returns a mutable reference to the conversion fields.
    fn get_conversion(&mut self) -> &mut Conversion;

    /// Sets the source currency code.
    fn with_from(mut self, from: &str) -> Self
    where
        Self: Sized,
    {
        self.get_conversion().from = from.to_string();
        self
    }

    /// Sets several source currencies, sent comma-joined.
    fn with_from_currencies<S: AsRef<str>>(mut self, codes: &[S]) -> Self
    where
        Self: Sized,
    {
        self.get_conversion().from = join_codes(codes);
        self
    }

    /// Sets the target currency code.
    fn with_to(mut self, to: &str) -> Self
    where
        Self: Sized,
    {
        self.get_conversion().to = to.to_string();
        self
    }

    /// Sets several target currencies, sent comma-joined.
    fn with_to_currencies<S: AsRef<str>>(mut self, codes: &[S]) -> Self
    where
        Self: Sized,
    {
        self.get_conversion().to = join_codes(codes);
        self
    }

    fn with_amount(mut self, amount: f64) -> Self
    where
        Self: Sized,
    {
        self.get_conversion().amount = amount;
        self
    }

    fn with_obsolete(mut self, obsolete: bool) -> Self
    where
        Self: Sized,
    {
        self.get_conversion().obsolete = obsolete;
        self
    }

    fn with_inverse(mut self, inverse: bool) -> Self
    where
        Self: Sized,
    {
        self.get_conversion().inverse = inverse;
        self
    }
}

/// Converts from one currency into one or more others (`convert_from.json`).
#[derive(Clone, Debug, Default)]
pub struct ConvertFromQuery {
    pub conversion: Conversion,
    pub overrides: QueryParams,
}

impl Query for ConvertFromQuery {
    fn resource(&self) -> Resource {
        Resource::ConvertFrom
    }
    fn default_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.conversion.insert_into(&mut params);
        params
    }
    fn overrides(&self) -> &QueryParams {
        &self.overrides
    }
    fn overrides_mut(&mut self) -> &mut QueryParams {
        &mut self.overrides
    }
}

impl ConversionQuery for ConvertFromQuery {
    fn get_conversion(&mut self) -> &mut Conversion {
        &mut self.conversion
    }
}

/// Converts one or more currencies into a single target (`convert_to.json`).
#[derive(Clone, Debug)]
pub struct ConvertToQuery {
    pub conversion: Conversion,
    pub overrides: QueryParams,
}

impl Default for ConvertToQuery {
    fn default() -> Self {
        Self {
            conversion: Conversion::reverse(),
            overrides: QueryParams::new(),
        }
    }
}

impl Query for ConvertToQuery {
    fn resource(&self) -> Resource {
        Resource::ConvertTo
    }
    fn default_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.conversion.insert_into(&mut params);
        params
    }
    fn overrides(&self) -> &QueryParams {
        &self.overrides
    }
    fn overrides_mut(&mut self) -> &mut QueryParams {
        &mut self.overrides
    }
}

impl ConversionQuery for ConvertToQuery {
    fn get_conversion(&mut self) -> &mut Conversion {
        &mut self.conversion
    }
}
