//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the HTTP client with the configured user agent
//! - GET requests for the target page
//! - GET requests for binary resources (images, language data)
//!
//! There is no retry logic. A failed request is returned to the caller,
//! which decides whether it is fatal.

use crate::config::FetchConfig;
use crate::{HarvestError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A successfully fetched HTML page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value (empty if absent)
    pub content_type: String,
    /// Page body content
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use site_harvest::config::FetchConfig;
/// use site_harvest::scrape::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> std::result::Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches an HTML page
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | Connection refused, TLS failure, timeout | `HarvestError::Http` |
/// | Non-2xx status | `HarvestError::Status` |
/// | Body is not valid text | `HarvestError::Http` |
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage> {
    let response = send_get(client, url).await?;

    let status_code = response.status().as_u16();
    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.is_empty() && !content_type.contains("html") {
        tracing::warn!(
            "{} returned Content-Type '{}', parsing as HTML anyway",
            url,
            content_type
        );
    }

    let body = response.text().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("Fetched {} ({} bytes, status {})", final_url, body.len(), status_code);

    Ok(FetchedPage {
        final_url,
        status_code,
        content_type,
        body,
    })
}

/// Fetches a resource as raw bytes
pub async fn fetch_bytes(client: &Client, url: &Url) -> Result<Vec<u8>> {
    let response = send_get(client, url).await?;
    let bytes = response.bytes().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })?;
    Ok(bytes.to_vec())
}

/// Fetches a resource as text
pub async fn fetch_text(client: &Client, url: &Url) -> Result<String> {
    let response = send_get(client, url).await?;
    response.text().await.map_err(|source| HarvestError::Http {
        url: url.to_string(),
        source,
    })
}

/// Sends a GET request and rejects non-2xx responses
async fn send_get(client: &Client, url: &Url) -> Result<reqwest::Response> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}
