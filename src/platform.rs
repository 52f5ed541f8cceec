//! Source platform detection.
//!
//! Classifies a URL by its host. Pure, no I/O. Unknown hosts and input that
//! does not parse as a URL are treated as generic articles.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

// Anchored to the whole host: the domain itself or any subdomain of it
static INSTAGRAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\.)instagram\.com$").expect("valid regex"));
static TWITTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\.)(twitter|x)\.com$").expect("valid regex"));
static YOUTUBE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\.)(youtube\.com|youtu\.be)$").expect("valid regex"));
static INSTAGRAM_REEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/reel/").expect("valid regex"));

/// Platform a bookmarked URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    #[serde(rename = "youtube")]
    YouTube,
    #[default]
    Article,
}

impl Platform {
    /// All platforms in detection order.
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::YouTube,
        Platform::Article,
    ];

    /// Lowercase identifier used in records and prompts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::YouTube => "youtube",
            Platform::Article => "article",
        }
    }

    /// Parse a lowercase identifier. Anything unknown is an article.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "instagram" => Platform::Instagram,
            "twitter" | "x" => Platform::Twitter,
            "youtube" => Platform::YouTube,
            _ => Platform::Article,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the platform of a URL from its host. First match wins; no match
/// (or no parseable host) means [`Platform::Article`].
#[must_use]
pub fn detect(url: &str) -> Platform {
    match Url::parse(url.trim()) {
        Ok(parsed) => parsed.host_str().map_or(Platform::Article, detect_host),
        Err(_) => Platform::Article,
    }
}

/// Platform for a bare host name such as `www.instagram.com`.
#[must_use]
pub fn detect_host(host: &str) -> Platform {
    let host = host.trim_end_matches('.');
    if INSTAGRAM.is_match(host) {
        Platform::Instagram
    } else if TWITTER.is_match(host) {
        Platform::Twitter
    } else if YOUTUBE.is_match(host) {
        Platform::YouTube
    } else {
        Platform::Article
    }
}

/// Whether the URL path marks an Instagram reel (as opposed to a post).
#[must_use]
pub fn is_reel_path(url: &str) -> bool {
    INSTAGRAM_REEL.is_match(url)
}

/// Whether the URL is an Instagram reel.
#[must_use]
pub fn is_instagram_reel(url: &str) -> bool {
    detect(url) == Platform::Instagram && is_reel_path(url)
}
