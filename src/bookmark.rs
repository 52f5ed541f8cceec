//! The record handed to storage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classify::{Category, ClassificationResult};
use crate::content::ExtractedContent;
use crate::normalize::resolve_title;
use crate::platform::Platform;

/// A saved link: extraction plus classification, normalised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub url: String,
    pub platform: Platform,
    pub title: String,
    pub caption: String,
    pub summary: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub thumbnail: String,
    pub video_url: String,
    pub embed_url: Option<String>,
    pub author: String,
    pub raw_data: Value,
}

impl Bookmark {
    /// Combine both pipeline stages into the stored shape.
    #[must_use]
    pub fn assemble(url: &str, content: ExtractedContent, ai: ClassificationResult) -> Self {
        let title = resolve_title(&content, url, &ai);
        Self {
            url: url.to_string(),
            platform: content.platform,
            title,
            caption: content.caption,
            summary: ai.summary,
            category: ai.category,
            tags: ai.tags,
            thumbnail: content.thumbnail,
            video_url: content.video_url,
            embed_url: content.embed_url.filter(|u| !u.is_empty()),
            author: content.author,
            raw_data: content.raw_data,
        }
    }
}
