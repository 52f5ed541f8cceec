//! Offline keyword classifier.
//!
//! Fully deterministic: the same input text always yields the same title,
//! category, tags, and summary. This is the floor of the provider chain.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::category::Category;
use super::response::is_noise_tag;
use super::ClassificationResult;
use crate::platform::Platform;
use crate::titles::title_from_url;

/// Title used when neither the text nor the URL yield one.
pub const SAVED_CONTENT: &str = "Saved Content";

const MAX_TAGS: usize = 5;
const MAX_KEYWORD_TAGS: usize = 3;
const SUMMARY_MAX_CHARS: usize = 180;
const SUMMARY_MIN_CUT: usize = 100;
const TITLE_WORDS: usize = 8;

static ENGAGEMENT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d[\d.,KkMm]*\s*(likes?|views?|comments?|shares?)[^-\n]*[-–]\s*").unwrap()
});
static DATE_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+on\s+\w+ \d{1,2},\s*\d{4}:\s*").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[a-zA-Z][a-zA-Z0-9_]*").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());
static HASHTAG_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(#\w+\s*){3,}").unwrap());

/// Classify `text` without any network access.
#[must_use]
pub fn classify_offline(text: &str, platform: Platform, url: &str) -> ClassificationResult {
    let cleaned = clean_caption(text);
    let haystack = format!("{cleaned} {url}").to_lowercase();

    let (category, matched) = score_categories(&haystack);

    // Links still count for scoring but never end up in prose
    let prose = strip_links(&cleaned);

    ClassificationResult {
        title: fallback_title(&prose, url),
        category,
        tags: fallback_tags(text, &matched),
        summary: summarize(&prose, category, platform),
    }
}

/// Remove `http(s)://` links and collapse the whitespace they leave.
#[must_use]
pub fn strip_links(text: &str) -> String {
    let text = LINK.replace_all(text, " ");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Strip engagement-count prefixes and oEmbed date fragments, collapse whitespace.
///
/// `"12K likes, 41 comments - chef on May 3, 2024: pasta"` → `"chef: pasta"`.
#[must_use]
pub fn clean_caption(text: &str) -> String {
    let text = ENGAGEMENT_PREFIX.replace_all(text, "");
    let text = DATE_FRAGMENT.replace_all(&text, ": ");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Title from cleaned caption text, or empty if nothing readable.
///
/// Prefers the text before a colon, then the first sentence, when that
/// boundary sits strictly between character 10 and 80. Otherwise the
/// first eight words.
#[must_use]
pub fn title_from_caption(caption: &str) -> String {
    if caption.is_empty() {
        return String::new();
    }

    let boundary = |pred: fn(char) -> bool| {
        caption
            .chars()
            .position(pred)
            .filter(|&idx| idx > 10 && idx < 80)
    };

    if let Some(idx) = boundary(|c| c == ':').or_else(|| boundary(|c| matches!(c, '.' | '!' | '?'))) {
        return caption.chars().take(idx).collect::<String>().trim().to_string();
    }

    let words = caption.split(' ').take(TITLE_WORDS).collect::<Vec<_>>().join(" ");
    if words.chars().count() > 3 {
        words
    } else {
        String::new()
    }
}

fn fallback_title(cleaned: &str, url: &str) -> String {
    let title = title_from_caption(cleaned);
    if !title.is_empty() {
        return title;
    }
    if Url::parse(url).is_ok() {
        return title_from_url(url);
    }
    SAVED_CONTENT.to_string()
}

/// Best category and the keywords it matched.
///
/// A later category must score strictly higher to win, so ties resolve to
/// the first declared. No matches at all is `Uncategorized`.
#[must_use]
pub fn score_categories(haystack: &str) -> (Category, Vec<&'static str>) {
    let mut best = (Category::Uncategorized, Vec::new());

    for category in Category::SCORED {
        let matches: Vec<&'static str> = category
            .keywords()
            .iter()
            .copied()
            .filter(|k| haystack.contains(k))
            .collect();
        if matches.len() > best.1.len() {
            best = (category, matches);
        }
    }

    best
}

/// Lowercased, deduplicated, noise-filtered hashtags in order of appearance.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    HASHTAG
        .find_iter(text)
        .map(|m| m.as_str()[1..].to_lowercase())
        .filter(|tag| !is_noise_tag(tag))
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

/// Hashtags first, backfilled with single-word matched keywords.
fn fallback_tags(raw: &str, matched: &[&str]) -> Vec<String> {
    let keyword_tags = matched
        .iter()
        .filter(|k| k.chars().count() > 3 && !k.contains(' '))
        .take(MAX_KEYWORD_TAGS)
        .map(|k| (*k).to_string());

    let mut seen = HashSet::new();
    extract_hashtags(raw)
        .into_iter()
        .chain(keyword_tags)
        .filter(|tag| seen.insert(tag.clone()))
        .take(MAX_TAGS)
        .collect()
}

/// Short summary from the cleaned text with hashtag blocks removed.
fn summarize(cleaned: &str, category: Category, platform: Platform) -> String {
    let text = HASHTAG_BLOCK.replace_all(cleaned, "");
    let text = text.trim();

    if text.is_empty() {
        let subject = if category == Category::Uncategorized {
            platform.as_str().to_string()
        } else {
            category.as_str().to_lowercase()
        };
        return format!("A {subject} post saved from {platform}.");
    }

    if text.chars().count() <= SUMMARY_MAX_CHARS {
        return text.to_string();
    }

    let cut: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
    let cut = match cut.rfind(' ') {
        Some(idx) if cut[..idx].chars().count() > SUMMARY_MIN_CUT => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{cut}…")
}
