//! Parsing of provider JSON into a [`ClassificationResult`].

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::ClassificationResult;
use crate::error::ProviderError;
use crate::normalize::resolve_category;

/// Most tags kept from a provider response.
pub const MAX_PROVIDER_TAGS: usize = 6;

/// Engagement hashtags that say nothing about the content.
pub const NOISE_TAGS: &[&str] = &[
    "viral", "trending", "fyp", "foryou", "foryoupage", "explorepage", "explore_page",
    "follow", "followme", "like", "likes", "share", "reels", "reel", "instagood",
    "love", "instagram", "instadaily", "photooftheday", "tiktok",
];

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```(?:json)?\n?").unwrap());

/// Whether a lowercased tag is on the noise list.
#[must_use]
pub fn is_noise_tag(tag: &str) -> bool {
    NOISE_TAGS.contains(&tag)
}

/// Remove markdown code fences around a model reply.
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

/// Parse a provider reply. Malformed JSON is a provider failure.
pub fn parse_classification(raw: &str) -> Result<ClassificationResult, ProviderError> {
    let body = strip_code_fences(raw);
    if body.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let reply: ProviderReply = serde_json::from_str(&body)?;

    Ok(ClassificationResult {
        title: reply.title.trim().to_string(),
        category: resolve_category(&reply.category),
        tags: clean_tags(&reply.tags),
        summary: reply.summary.trim().to_string(),
    })
}

/// Lowercase, strip `#`, drop noise and duplicates, keep at most six.
#[must_use]
pub fn clean_tags(tags: &[Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .filter_map(Value::as_str)
        .map(|tag| tag.trim().trim_start_matches('#').trim().to_lowercase())
        .filter(|tag| !tag.is_empty() && !is_noise_tag(tag))
        .filter(|tag| seen.insert(tag.clone()))
        .take(MAX_PROVIDER_TAGS)
        .collect()
}

// ============================================================================
// Provider Reply Schema
// ============================================================================

#[derive(Debug, Deserialize)]
struct ProviderReply {
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    tags: Vec<Value>,
    #[serde(default)]
    summary: String,
}
