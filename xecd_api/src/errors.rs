//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Nothing here inspects the response status: a non-2xx reply with a JSON
/// body is returned to the caller like any other document.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Base URL and resource path did not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Transport failure (connection, TLS, timeout) or HTTP client setup failure.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The response body was not valid JSON.
    #[error("Failed to decode response (status {status}): {source}")]
    Decode {
        status: u16,
        /// Leading part of the body, for diagnostics.
        body: String,
        #[source]
        source: serde_json::Error,
    },
}
