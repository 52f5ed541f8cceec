//! YouTube content extraction.
//!
//! The embed URL and a fallback thumbnail are derived from the video ID
//! without any network call; title, description, and channel come from the
//! watch page's meta tags.

use async_trait::async_trait;
use tracing::instrument;
use url::Url;

use super::SiteExtractor;
use crate::content::ExtractedContent;
use crate::platform::Platform;
use crate::scrape::MetaTagScraper;

/// YouTube extractor backed by the meta-tag scraper.
pub struct YouTubeExtractor {
    scraper: MetaTagScraper,
}

impl YouTubeExtractor {
    #[must_use]
    pub fn new(scraper: MetaTagScraper) -> Self {
        Self { scraper }
    }
}

#[async_trait]
impl SiteExtractor for YouTubeExtractor {
    fn name(&self) -> &'static str {
        "youtube"
    }

    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    #[instrument(skip(self), fields(url = %url))]
    async fn extract(&self, url: &str) -> ExtractedContent {
        let mut content = self.scraper.scrape(url).await;

        if let Some(id) = video_id(url) {
            content.embed_url = Some(embed_url(&id));
            if content.thumbnail.is_empty() {
                content.thumbnail = thumbnail_url(&id);
            }
        }

        content
    }
}

/// Video ID from `youtu.be/<id>`, `/shorts/<id>`, `/embed/<id>`, or `?v=<id>`.
#[must_use]
pub fn video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());

    let id = if host.ends_with("youtu.be") {
        segments.next().map(str::to_string)
    } else {
        match segments.next() {
            Some("shorts" | "embed" | "live") => segments.next().map(str::to_string),
            _ => parsed
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned()),
        }
    };

    id.filter(|id| !id.is_empty())
}

/// Canonical iframe URL for a video.
#[must_use]
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

/// Predictable CDN thumbnail for a video.
#[must_use]
pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_watch_urls() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            video_id("https://m.youtube.com/watch?feature=share&v=abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn parses_short_links() {
        assert_eq!(
            video_id("https://youtu.be/dQw4w9WgXcQ?si=xyz").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn parses_shorts() {
        assert_eq!(
            video_id("https://www.youtube.com/shorts/Zx9_ab-12").as_deref(),
            Some("Zx9_ab-12")
        );
    }

    #[test]
    fn no_id_for_channel_pages() {
        assert_eq!(video_id("https://www.youtube.com/@somechannel"), None);
        assert_eq!(video_id("https://www.youtube.com/"), None);
        assert_eq!(video_id("https://youtu.be/"), None);
    }

    #[test]
    fn builds_canonical_urls() {
        assert_eq!(embed_url("abc"), "https://www.youtube.com/embed/abc");
        assert_eq!(
            thumbnail_url("abc"),
            "https://img.youtube.com/vi/abc/hqdefault.jpg"
        );
    }
}
