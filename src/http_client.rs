//! Shared HTTP client
//!
//! One pooled `reqwest` client for every outbound fetch the pipeline makes:
//! - Hard per-request timeout (10s by default)
//! - Redirects followed up to 5 hops
//! - Brotli/Gzip/Deflate decompression
//! - Identity headers chosen per request from [`BrowserProfile`]
//!
//! Non-2xx responses are errors so callers can fall through to the next strategy.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::fingerprint::{BrowserProfile, DESKTOP_CHROME, GOOGLEBOT};

/// Timeout for page scrapes and oEmbed calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum redirect hops followed.
pub const MAX_REDIRECTS: usize = 5;

/// HTTP client used by the scraper and every platform extractor.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    /// Create a client with the default 10s timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a specific per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            // Let the server negotiate HTTP/1.1 vs HTTP/2
            .http2_adaptive_window(true)
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .default_headers(GOOGLEBOT.to_headers())
            .connect_timeout(timeout)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .cookie_store(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// GET a URL presenting the given identity. Non-2xx is an error.
    #[instrument(skip(self, profile), fields(url = %url, profile = profile.name))]
    pub async fn fetch(&self, url: &str, profile: &BrowserProfile) -> Result<Response> {
        debug!("Fetching");
        let response = self
            .client
            .get(url)
            .headers(profile.to_headers())
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        debug!(status = %response.status(), "Response received");

        response
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))
    }

    /// Fetch and return body as string.
    pub async fn fetch_text_as(&self, url: &str, profile: &BrowserProfile) -> Result<String> {
        let response = self.fetch(url, profile).await?;
        let text = response
            .text()
            .await
            .with_context(|| format!("failed to read body of {url}"))?;
        Ok(text)
    }

    /// Fetch a JSON API endpoint and deserialize it.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_text_as(url, &DESKTOP_CHROME).await?;
        serde_json::from_str(&body).with_context(|| format!("invalid JSON from {url}"))
    }
}
