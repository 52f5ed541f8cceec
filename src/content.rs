//! Extraction-stage record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::platform::Platform;
use crate::titles::truncate_chars;

/// Captions longer than this are cut down to [`CAPTION_TRUNCATED_LEN`].
pub const CAPTION_MAX_LEN: usize = 500;
/// Length an over-long caption is cut to before the ellipsis.
pub const CAPTION_TRUNCATED_LEN: usize = 300;

/// Caption used when a page could not be fetched at all.
pub const DEGRADED_CAPTION: &str = "Saved from the web";

/// Normalised output of any platform extractor.
///
/// Every field is defaultable; empty strings mean "unknown".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedContent {
    /// Set once by the router after dispatch.
    pub platform: Platform,
    pub title: String,
    /// Richest natural-language description available.
    pub caption: String,
    pub author: String,
    pub thumbnail: String,
    /// Direct playable media URL (Instagram and articles only, best effort).
    pub video_url: String,
    /// Iframe-embeddable URL. Never set for Instagram reels.
    pub embed_url: Option<String>,
    /// Provider response kept for diagnostics. Never parsed downstream.
    pub raw_data: Value,
}

impl ExtractedContent {
    /// Bound the caption so classifier prompts and stored records stay small.
    pub fn cap_caption(&mut self) {
        if self.caption.chars().count() > CAPTION_MAX_LEN {
            let cut = truncate_chars(&self.caption, CAPTION_TRUNCATED_LEN);
            self.caption = format!("{cut}...");
        }
    }

    /// Fill empty fields from `other` without overwriting anything already known.
    pub fn fill_gaps_from(&mut self, other: &ExtractedContent) {
        fill(&mut self.caption, &other.caption);
        fill(&mut self.thumbnail, &other.thumbnail);
        fill(&mut self.author, &other.author);
        fill(&mut self.video_url, &other.video_url);
    }
}

fn fill(target: &mut String, source: &str) {
    if target.trim().is_empty() && !source.trim().is_empty() {
        *target = source.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_captions_are_untouched() {
        let mut content = ExtractedContent {
            caption: "a".repeat(CAPTION_MAX_LEN),
            ..Default::default()
        };
        content.cap_caption();
        assert_eq!(content.caption.len(), CAPTION_MAX_LEN);
    }

    #[test]
    fn long_captions_are_cut_to_300_plus_ellipsis() {
        let mut content = ExtractedContent {
            caption: "b".repeat(CAPTION_MAX_LEN + 1),
            ..Default::default()
        };
        content.cap_caption();
        assert_eq!(content.caption.len(), CAPTION_TRUNCATED_LEN + 3);
        assert!(content.caption.ends_with("..."));
    }

    #[test]
    fn gap_fill_keeps_known_fields() {
        let mut primary = ExtractedContent {
            caption: "from oembed".into(),
            author: "chefmaria".into(),
            ..Default::default()
        };
        let scraped = ExtractedContent {
            caption: "from scrape".into(),
            thumbnail: "https://cdn.example.com/t.jpg".into(),
            author: "someone else".into(),
            ..Default::default()
        };
        primary.fill_gaps_from(&scraped);
        assert_eq!(primary.caption, "from oembed");
        assert_eq!(primary.author, "chefmaria");
        assert_eq!(primary.thumbnail, "https://cdn.example.com/t.jpg");
    }

    #[test]
    fn serializes_camel_case() {
        let content = ExtractedContent {
            video_url: "v".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["videoUrl"], "v");
        assert_eq!(json["platform"], "article");
        assert!(json["embedUrl"].is_null());
    }
}
