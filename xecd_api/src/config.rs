//! Client configuration: credentials, service root and client-wide query defaults.

use std::fmt;

use crate::query::{QueryParams, QueryValue};

/// Root of the production XECD API.
pub const DEFAULT_BASE_URL: &str = "https://xecdapi.xe.com/v1/";

/// Account identifier and API key, sent as HTTP Basic credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_id: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            api_key: api_key.into(),
        }
    }
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Connection settings for a [`crate::Client`]. Fixed once the client is built.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub auth: Credentials,
    /// Service root. Resource paths are appended to it.
    pub base_url: String,
    /// Parameters sent with every request, below the resource defaults.
    pub qs: QueryParams,
}

impl ClientConfig {
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            auth: Credentials::new(account_id, api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            qs: QueryParams::new(),
        }
    }

    /// Applies overrides on top of this configuration. Each present entry
    /// replaces the current one wholesale.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(auth) = overrides.auth {
            self.auth = auth;
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(qs) = overrides.qs {
            self.qs = qs;
        }
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Adds a parameter sent with every request.
    pub fn with_default_param(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.qs.insert(key, value);
        self
    }

    /// Full URL of a resource path: the base URL, a `/` if it lacks one, then the path.
    pub fn resource_url(&self, path: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Optional replacements for the default configuration, recognised keys
/// `auth`, `baseUrl` and `qs`.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub auth: Option<Credentials>,
    pub base_url: Option<String>,
    pub qs: Option<QueryParams>,
}
