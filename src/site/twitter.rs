//! Twitter/X content extraction via the publish oEmbed API.
//!
//! The oEmbed response carries an HTML blockquote; its first paragraph is the
//! tweet text. oEmbed has no image, so the page's `og:image` is scraped
//! alongside it. When oEmbed fails the scraped page is used instead, and when
//! both fail a `"Tweet by @handle"` record is built from the URL alone.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};
use url::Url;

use super::SiteExtractor;
use crate::content::ExtractedContent;
use crate::fingerprint::GOOGLEBOT;
use crate::http_client::FetchClient;
use crate::platform::{detect_host, Platform};
use crate::scrape::MetaTagScraper;
use crate::titles::truncate_chars;

/// Public oEmbed endpoint.
pub const OEMBED_ENDPOINT: &str = "https://publish.twitter.com/oembed";

const MAX_TITLE_CHARS: usize = 100;
const FALLBACK_CAPTION: &str = "Saved tweet from Twitter/X";

static X_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^((www|mobile)\.)?x\.com\.?$").unwrap());
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Twitter/X extractor using oEmbed with scrape fallback.
pub struct TwitterExtractor {
    client: FetchClient,
    scraper: MetaTagScraper,
    oembed_endpoint: String,
}

impl TwitterExtractor {
    #[must_use]
    pub fn new(client: FetchClient, scraper: MetaTagScraper, oembed_endpoint: String) -> Self {
        Self {
            client,
            scraper,
            oembed_endpoint,
        }
    }

    async fn oembed(&self, url: &str) -> Result<(TwitterOEmbed, Value)> {
        let twitter_url = normalize_x_url(url);
        let oembed_url = format!(
            "{}?url={}",
            self.oembed_endpoint,
            urlencoding::encode(&twitter_url)
        );
        debug!("Fetching from Twitter oEmbed: {}", oembed_url);

        let raw: Value = self
            .client
            .fetch_json(&oembed_url)
            .await
            .context("Failed to fetch from Twitter oEmbed API")?;
        let oembed: TwitterOEmbed =
            serde_json::from_value(raw.clone()).context("Failed to parse Twitter response")?;

        Ok((oembed, raw))
    }
}

#[async_trait]
impl SiteExtractor for TwitterExtractor {
    fn name(&self) -> &'static str {
        "twitter"
    }

    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    #[instrument(skip(self), fields(url = %url))]
    async fn extract(&self, url: &str) -> ExtractedContent {
        // Independent reads: the page scrape doubles as thumbnail source and fallback
        let (oembed, page) = tokio::join!(
            self.oembed(url),
            self.scraper.page_meta(url, &GOOGLEBOT)
        );

        let mut content = match (oembed, page) {
            (Ok((oembed, raw)), page) => {
                let text = tweet_text(oembed.html.as_deref().unwrap_or_default());
                let handle = handle_from_url(url);
                ExtractedContent {
                    title: if text.is_empty() {
                        format!("Tweet by {handle}")
                    } else {
                        truncate_chars(&text, MAX_TITLE_CHARS).trim_end().to_string()
                    },
                    caption: text,
                    author: oembed.author_name.unwrap_or(handle),
                    thumbnail: page.ok().and_then(|meta| meta.image).unwrap_or_default(),
                    raw_data: raw,
                    ..Default::default()
                }
            }
            (Err(e), Ok(meta)) => {
                warn!("Twitter oEmbed failed for {}: {:#}", url, e);
                meta.into_content()
            }
            (Err(oembed_err), Err(page_err)) => {
                warn!(
                    "Twitter oEmbed and scrape both failed for {}: {:#}; {:#}",
                    url, oembed_err, page_err
                );
                fallback_content(url)
            }
        };

        content.embed_url = Some(url.to_string());
        content
    }
}

/// Rewrite `x.com` links to `twitter.com`, which oEmbed understands.
/// Any other host is returned untouched.
#[must_use]
pub fn normalize_x_url(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url.trim()) else {
        return url.to_string();
    };
    if !parsed.host_str().is_some_and(|host| X_HOST.is_match(host)) {
        return url.to_string();
    }
    if parsed.set_host(Some("twitter.com")).is_err() || parsed.set_scheme("https").is_err() {
        return url.to_string();
    }
    parsed.to_string()
}

/// `@handle` from the first path segment of a Twitter/X URL, or `unknown`.
#[must_use]
pub fn handle_from_url(url: &str) -> String {
    Url::parse(url.trim())
        .ok()
        .filter(|parsed| {
            parsed
                .host_str()
                .is_some_and(|host| detect_host(host) == Platform::Twitter)
        })
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next().map(str::to_string))
        })
        .filter(|segment| !segment.is_empty())
        .map_or_else(|| "unknown".to_string(), |handle| format!("@{handle}"))
}

/// Plain text of the first paragraph in an oEmbed HTML fragment.
#[must_use]
pub fn tweet_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment
        .select(&PARAGRAPH)
        .next()
        .map(|p| p.text().collect::<String>())
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Record built from the URL alone when every source failed.
fn fallback_content(url: &str) -> ExtractedContent {
    let handle = handle_from_url(url);
    ExtractedContent {
        title: format!("Tweet by {handle}"),
        caption: FALLBACK_CAPTION.to_string(),
        author: handle,
        raw_data: json!({}),
        ..Default::default()
    }
}

// ============================================================================
// Twitter oEmbed API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct TwitterOEmbed {
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    author_name: Option<String>,
}
