//! Page fetching over HTTP/HTTPS.
//!
//! This module retrieves raw HTML from a user-supplied URL. Certificate
//! validation uses the platform trust store via reqwest's TLS backends;
//! non-success statuses and transport failures become [`RecastError`]
//! variants rather than in-band error text.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{RecastError, Result};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Recast/0.1; +https://github.com/stormlightlabs/recast)".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects, respects the configured timeout, and uses
/// a browser-like User-Agent for better compatibility.
///
/// # Errors
///
/// Returns [`RecastError::InvalidUrl`] for malformed URLs,
/// [`RecastError::FetchFailed`] for non-2xx statuses, and
/// [`RecastError::Timeout`] or [`RecastError::HttpError`] for transport
/// failures.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| RecastError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(RecastError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(RecastError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                RecastError::Timeout { timeout: config.timeout }
            } else {
                RecastError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(RecastError::FetchFailed { status: status.as_u16() });
    }

    let content = response.text().await?;

    Ok(content)
}
