//! Credential and endpoint resolution: flags first, then the environment.

use anyhow::{bail, Result};
use xecd_api::ClientConfig;

pub const ACCOUNT_ID_VAR: &str = "XECD_ACCOUNT_ID";
pub const API_KEY_VAR: &str = "XECD_API_KEY";
pub const BASE_URL_VAR: &str = "XECD_BASE_URL";

/// Connection flags as given on the command line.
#[derive(Default)]
pub struct ConnectionFlags<'a> {
    pub account_id: Option<&'a str>,
    pub api_key: Option<&'a str>,
    pub base_url: Option<&'a str>,
}

/// Builds the client configuration from the process environment.
pub fn resolve(flags: &ConnectionFlags) -> Result<ClientConfig> {
    resolve_with(flags, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading variables through `lookup`.
pub fn resolve_with<F>(flags: &ConnectionFlags, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let pick = |flag: Option<&str>, var: &str| {
        flag.map(|s| s.to_string())
            .or_else(|| lookup(var))
            .filter(|s| !s.trim().is_empty())
    };

    let Some(account_id) = pick(flags.account_id, ACCOUNT_ID_VAR) else {
        bail!(
            "missing account id: pass --account-id or set {}",
            ACCOUNT_ID_VAR
        );
    };
    let Some(api_key) = pick(flags.api_key, API_KEY_VAR) else {
        bail!("missing API key: pass --api-key or set {}", API_KEY_VAR);
    };

    let mut config = ClientConfig::new(account_id, api_key);
    if let Some(base_url) = pick(flags.base_url, BASE_URL_VAR) {
        config = config.with_base_url(&base_url);
    }
    Ok(config)
}
