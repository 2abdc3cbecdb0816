use super::common::{Query, QueryParams, Resource};

/// Currency list (`currencies.json`).
#[derive(Clone, Debug)]
pub struct CurrenciesQuery {
    pub obsolete: bool,
    /// Language of the currency names, e.g. `en`.
    pub language: String,
    /// ISO 4217 codes to list. `*` lists every currency.
    pub iso: Vec<String>,
    pub overrides: QueryParams,
}

impl Default for CurrenciesQuery {
    fn default() -> Self {
        Self {
            obsolete: false,
            language: "en".to_string(),
            iso: vec!["*".to_string()],
            overrides: QueryParams::new(),
        }
    }
}

impl Query for CurrenciesQuery {
    fn resource(&self) -> Resource {
        Resource::Currencies
    }
    fn default_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert("obsolete", self.obsolete);
        params.insert("language", self.language.as_str());
        params.insert("iso", self.iso.join(","));
        params
    }
    fn overrides(&self) -> &QueryParams {
        &self.overrides
    }
    fn overrides_mut(&mut self) -> &mut QueryParams {
        &mut self.overrides
    }
}

impl CurrenciesQuery {
    pub fn with_obsolete(mut self, obsolete: bool) -> Self {
        self.obsolete = obsolete;
        self
    }
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
    /// Replaces the ISO code filter.
    pub fn with_iso<S: AsRef<str>>(mut self, codes: &[S]) -> Self {
        self.iso = codes.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }
}
