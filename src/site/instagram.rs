//! Instagram content extraction via oEmbed API.
//!
//! Uses Instagram's oEmbed endpoint for caption, author, and thumbnail of
//! posts and reels, with the meta-tag scraper filling whatever oEmbed leaves
//! out (or replacing it entirely when oEmbed is down).
//!
//! Reels have no usable native title and may not be iframed, so:
//! - titles are synthesised from the caption, or `"{author}'s Reel"`
//! - reels never receive an embed URL; posts get `<post url>/embed`
//!
//! A direct video URL is looked up through a [`MediaChain`] regardless of
//! which path produced the metadata.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use super::SiteExtractor;
use crate::content::{ExtractedContent, DEGRADED_CAPTION};
use crate::fingerprint::GOOGLEBOT;
use crate::http_client::FetchClient;
use crate::media::MediaChain;
use crate::platform::{is_reel_path, Platform};
use crate::scrape::MetaTagScraper;
use crate::titles::{is_bare_slug, truncate_chars};

/// Public oEmbed endpoint.
pub const OEMBED_ENDPOINT: &str = "https://api.instagram.com/oembed";

const MAX_TITLE_CHARS: usize = 100;

/// Instagram extractor using oEmbed with scrape and media fallbacks.
pub struct InstagramExtractor {
    client: FetchClient,
    scraper: MetaTagScraper,
    oembed_endpoint: String,
    media: MediaChain,
}

impl InstagramExtractor {
    #[must_use]
    pub fn new(
        client: FetchClient,
        scraper: MetaTagScraper,
        oembed_endpoint: String,
        media: MediaChain,
    ) -> Self {
        Self {
            client,
            scraper,
            oembed_endpoint,
            media,
        }
    }

    async fn oembed(&self, url: &str) -> Result<ExtractedContent> {
        let oembed_url = format!("{}?url={}", self.oembed_endpoint, urlencoding::encode(url));
        debug!("Fetching from Instagram oEmbed: {}", oembed_url);

        let raw: Value = self
            .client
            .fetch_json(&oembed_url)
            .await
            .context("Failed to fetch from Instagram oEmbed API")?;

        let oembed: InstagramOEmbed =
            serde_json::from_value(raw.clone()).context("Failed to parse Instagram response")?;

        Ok(ExtractedContent {
            caption: oembed.title.unwrap_or_default().trim().to_string(),
            author: oembed.author_name.unwrap_or_default(),
            thumbnail: oembed.thumbnail_url.unwrap_or_default(),
            raw_data: raw,
            ..Default::default()
        })
    }
}

#[async_trait]
impl SiteExtractor for InstagramExtractor {
    fn name(&self) -> &'static str {
        "instagram"
    }

    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    #[instrument(skip(self), fields(url = %url))]
    async fn extract(&self, url: &str) -> ExtractedContent {
        let is_reel = is_reel_path(url);

        let mut content = match self.oembed(url).await {
            Ok(mut content) => {
                if content.caption.is_empty() || content.thumbnail.is_empty() {
                    match self.scraper.page_meta(url, &GOOGLEBOT).await {
                        Ok(meta) => content.fill_gaps_from(&meta.into_content()),
                        Err(e) => debug!("Gap-fill scrape failed: {:#}", e),
                    }
                }
                content
            }
            Err(e) => {
                warn!("Instagram oEmbed failed for {}: {:#}", url, e);
                self.scraper.scrape(url).await
            }
        };

        content.title = synthesize_title(&content.caption, &content.author, is_reel);
        content.embed_url = embed_url(url, is_reel);

        if content.video_url.is_empty() && !self.media.is_empty() {
            if let Some(video) = self.media.resolve(url).await {
                content.video_url = video;
            }
        }

        content
    }
}

/// Whether a caption reads as prose rather than an ID or a placeholder.
fn is_descriptive_caption(caption: &str) -> bool {
    let caption = caption.trim();
    caption.chars().count() > 3 && !is_bare_slug(caption) && caption != DEGRADED_CAPTION
}

/// Title for an Instagram record.
///
/// A descriptive caption becomes the title (first 100 characters). Otherwise
/// `"{author}'s Reel"`/`"{author}'s Post"`, or the generic
/// `"Instagram Reel"`/`"Instagram Post"` when the author is unknown too.
#[must_use]
pub fn synthesize_title(caption: &str, author: &str, is_reel: bool) -> String {
    if is_descriptive_caption(caption) {
        return truncate_chars(caption.trim(), MAX_TITLE_CHARS).trim_end().to_string();
    }

    let kind = if is_reel { "Reel" } else { "Post" };
    let author = author.trim();
    if author.is_empty() {
        format!("Instagram {kind}")
    } else {
        format!("{author}'s {kind}")
    }
}

/// Iframe URL for a post (`<path>/embed`). Reels are never embeddable.
#[must_use]
pub fn embed_url(url: &str, is_reel: bool) -> Option<String> {
    if is_reel {
        return None;
    }

    let mut parsed = Url::parse(url).ok()?;
    let path = format!("{}/embed", parsed.path().trim_end_matches('/'));
    parsed.set_path(&path);
    parsed.set_query(None);
    parsed.set_fragment(None);
    Some(parsed.to_string())
}

// ============================================================================
// Instagram oEmbed API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct InstagramOEmbed {
    #[serde(default)]
    author_name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_caption_falls_back_to_author_reel() {
        assert_eq!(
            synthesize_title("Cx7yZ1qLk9WabcdEFG2", "chefmaria", true),
            "chefmaria's Reel"
        );
    }

    #[test]
    fn missing_author_gives_generic_title() {
        assert_eq!(synthesize_title("", "", true), "Instagram Reel");
        assert_eq!(synthesize_title("abc", "", false), "Instagram Post");
    }

    #[test]
    fn degraded_caption_is_not_a_title() {
        assert_eq!(
            synthesize_title(DEGRADED_CAPTION, "chefmaria", false),
            "chefmaria's Post"
        );
    }

    #[test]
    fn descriptive_caption_becomes_title() {
        assert_eq!(
            synthesize_title("Creamy garlic pasta in 15 minutes", "chefmaria", true),
            "Creamy garlic pasta in 15 minutes"
        );
    }

    #[test]
    fn long_caption_title_is_truncated() {
        let caption = "word ".repeat(60);
        let title = synthesize_title(&caption, "a", false);
        assert!(title.chars().count() <= MAX_TITLE_CHARS);
        assert!(title.starts_with("word word"));
    }

    #[test]
    fn posts_get_embed_urls() {
        assert_eq!(
            embed_url("https://www.instagram.com/p/ABC123/?igsh=xyz", false).as_deref(),
            Some("https://www.instagram.com/p/ABC123/embed")
        );
        assert_eq!(
            embed_url("https://www.instagram.com/p/ABC123", false).as_deref(),
            Some("https://www.instagram.com/p/ABC123/embed")
        );
    }

    #[test]
    fn reels_never_get_embed_urls() {
        assert_eq!(embed_url("https://www.instagram.com/reel/ABC123/", true), None);
    }

    #[test]
    fn oembed_fields_are_optional() {
        let parsed: InstagramOEmbed = serde_json::from_str(r#"{"version": "1.0"}"#).unwrap();
        assert!(parsed.title.is_none());
        assert!(parsed.author_name.is_none());
    }
}
