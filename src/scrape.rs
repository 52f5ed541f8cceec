//! Open Graph / Twitter Card meta-tag scraping.
//!
//! The universal fallback for every platform: fetch the page as a crawler and
//! read the link-preview markup publishers embed for social cards.
//!
//! Field priority:
//!
//! | Field | Sources, in order |
//! |---|---|
//! | title | `og:title`, `twitter:title`, `<title>` |
//! | description | `og:description`, `twitter:description`, `description` |
//! | image | `og:image`, `twitter:image` |
//! | video | `og:video:secure_url`, `og:video`, `twitter:player:stream` |
//! | author | `author`, `article:author` |

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::Result;
use scraper::{Html, Selector};
use serde_json::json;
use tracing::{instrument, warn};

use crate::content::{ExtractedContent, DEGRADED_CAPTION};
use crate::fingerprint::{BrowserProfile, GOOGLEBOT};
use crate::http_client::FetchClient;
use crate::titles::{title_from_url, UNTITLED};

static META: LazyLock<Selector> = LazyLock::new(|| Selector::parse("meta").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Link-preview fields found on a page. `None` means the page did not provide it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
    pub author: Option<String>,
}

impl PageMeta {
    /// Shape the page fields into an extraction record.
    #[must_use]
    pub fn into_content(self) -> ExtractedContent {
        let raw_data = json!({
            "title": self.title.as_deref().unwrap_or_default(),
            "description": self.description.as_deref().unwrap_or_default(),
            "image": self.image.as_deref().unwrap_or_default(),
        });

        ExtractedContent {
            title: self.title.unwrap_or_else(|| UNTITLED.to_string()),
            caption: self.description.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            thumbnail: self.image.unwrap_or_default(),
            video_url: self.video.unwrap_or_default(),
            raw_data,
            ..Default::default()
        }
    }
}

/// Parse link-preview markup out of an HTML document.
#[must_use]
pub fn parse_page_meta(html: &str) -> PageMeta {
    let document = Html::parse_document(html);

    // First non-empty content per key; `property` and `name` are both honoured
    let mut tags: HashMap<String, String> = HashMap::new();
    for element in document.select(&META) {
        let value = element.value();
        let Some(content) = value.attr("content").map(str::trim) else {
            continue;
        };
        if content.is_empty() {
            continue;
        }
        for key in [value.attr("property"), value.attr("name")].into_iter().flatten() {
            tags.entry(key.trim().to_lowercase())
                .or_insert_with(|| content.to_string());
        }
    }

    let first_of = |keys: &[&str]| keys.iter().find_map(|k| tags.get(*k).cloned());

    let document_title = document
        .select(&TITLE)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    PageMeta {
        title: first_of(&["og:title", "twitter:title"]).or(document_title),
        description: first_of(&["og:description", "twitter:description", "description"]),
        image: first_of(&["og:image", "twitter:image"]),
        video: first_of(&["og:video:secure_url", "og:video", "twitter:player:stream"]),
        author: first_of(&["author", "article:author"]),
    }
}

/// Record returned when a page cannot be fetched or parsed at all.
#[must_use]
pub fn degraded_content(url: &str) -> ExtractedContent {
    ExtractedContent {
        title: title_from_url(url),
        caption: DEGRADED_CAPTION.to_string(),
        ..Default::default()
    }
}

/// Fetches pages and reads their meta tags.
#[derive(Debug, Clone)]
pub struct MetaTagScraper {
    client: FetchClient,
}

impl MetaTagScraper {
    #[must_use]
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Fetch `url` as `profile` and parse its meta tags.
    pub async fn page_meta(&self, url: &str, profile: &BrowserProfile) -> Result<PageMeta> {
        let html = self.client.fetch_text_as(url, profile).await?;
        Ok(parse_page_meta(&html))
    }

    /// Scrape a page into an extraction record. Never fails: any fetch or
    /// parse error yields [`degraded_content`].
    #[instrument(skip(self), fields(url = %url))]
    pub async fn scrape(&self, url: &str) -> ExtractedContent {
        match self.page_meta(url, &GOOGLEBOT).await {
            Ok(meta) => meta.into_content(),
            Err(e) => {
                warn!("Scrape failed for {}: {:#}", url, e);
                degraded_content(url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"<!doctype html>
<html><head>
  <title>Document Title</title>
  <meta property="og:title" content="  OG Title  ">
  <meta name="twitter:title" content="Twitter Title">
  <meta property="og:description" content="OG description">
  <meta name="description" content="Plain description">
  <meta property="og:image" content="https://cdn.example.com/og.jpg">
  <meta property="og:video" content="https://cdn.example.com/plain.mp4">
  <meta property="og:video:secure_url" content="https://cdn.example.com/secure.mp4">
  <meta name="author" content="Jane Doe">
</head><body></body></html>"#;

    #[test]
    fn prefers_open_graph_fields() {
        let meta = parse_page_meta(FULL_PAGE);
        assert_eq!(meta.title.as_deref(), Some("OG Title"));
        assert_eq!(meta.description.as_deref(), Some("OG description"));
        assert_eq!(meta.image.as_deref(), Some("https://cdn.example.com/og.jpg"));
        assert_eq!(meta.video.as_deref(), Some("https://cdn.example.com/secure.mp4"));
        assert_eq!(meta.author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn falls_back_through_priority_chain() {
        let html = r#"<html><head>
            <title>Only The Title Tag</title>
            <meta name="description" content="Plain description">
            <meta name="twitter:image" content="https://cdn.example.com/tw.jpg">
            <meta name="twitter:player:stream" content="https://cdn.example.com/stream.mp4">
            <meta property="article:author" content="Staff Writer">
        </head></html>"#;
        let meta = parse_page_meta(html);
        assert_eq!(meta.title.as_deref(), Some("Only The Title Tag"));
        assert_eq!(meta.description.as_deref(), Some("Plain description"));
        assert_eq!(meta.image.as_deref(), Some("https://cdn.example.com/tw.jpg"));
        assert_eq!(meta.video.as_deref(), Some("https://cdn.example.com/stream.mp4"));
        assert_eq!(meta.author.as_deref(), Some("Staff Writer"));
    }

    #[test]
    fn empty_content_attributes_are_skipped() {
        let html = r#"<html><head>
            <meta property="og:title" content="">
            <meta name="twitter:title" content="Twitter Wins">
        </head></html>"#;
        let meta = parse_page_meta(html);
        assert_eq!(meta.title.as_deref(), Some("Twitter Wins"));
    }

    #[test]
    fn missing_title_becomes_untitled() {
        let content = parse_page_meta("<html><body>nothing</body></html>").into_content();
        assert_eq!(content.title, UNTITLED);
        assert_eq!(content.caption, "");
        assert_eq!(content.author, "");
        assert!(content.embed_url.is_none());
    }

    #[test]
    fn degraded_record_uses_slug() {
        let content = degraded_content("https://blog.example.com/how-to-bake-bread");
        assert_eq!(content.title, "How To Bake Bread");
        assert_eq!(content.caption, DEGRADED_CAPTION);
        assert_eq!(content.thumbnail, "");
        assert_eq!(content.video_url, "");
    }

    #[test]
    fn html_entities_are_decoded() {
        let html = r#"<meta property="og:title" content="Salt &amp; Pepper">"#;
        assert_eq!(parse_page_meta(html).title.as_deref(), Some("Salt & Pepper"));
    }
}
