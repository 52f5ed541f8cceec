//! Title heuristics shared by extractors, the classifier fallback and the
//! normalizer.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Title used when nothing better is known.
pub const UNTITLED: &str = "Untitled";

/// Title used when a URL cannot even be parsed.
pub const SAVED_LINK: &str = "Saved Link";

static BARE_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{5,20}$").unwrap());
static FILE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.[a-z]+$").unwrap());
static GENERIC_INSTAGRAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^instagram (reel|post)$").unwrap());

/// A 5–20 character run of `[A-Za-z0-9_-]` with no spaces: a post ID, not prose.
#[must_use]
pub fn is_bare_slug(text: &str) -> bool {
    BARE_SLUG.is_match(text.trim())
}

/// Exactly `"Instagram Reel"` or `"Instagram Post"`, any case.
#[must_use]
pub fn is_generic_instagram_title(title: &str) -> bool {
    GENERIC_INSTAGRAM.is_match(title.trim())
}

/// Whether a title carries no information and should be replaced.
///
/// Junk titles are empty, bare ID slugs, generic placeholders
/// (`Untitled`, `Instagram Reel`, `Instagram Post`), or contain
/// unrendered `%%` template markers.
#[must_use]
pub fn is_placeholder_title(title: &str) -> bool {
    let trimmed = title.trim();
    trimmed.is_empty()
        || is_bare_slug(trimmed)
        || trimmed.contains("%%")
        || trimmed.eq_ignore_ascii_case(UNTITLED)
        || is_generic_instagram_title(trimmed)
}

/// Capitalise the first letter of every whitespace-separated word.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Readable title from the URL's last path segment, or its hostname.
///
/// `https://blog.example.com/how-to-bake-bread` → `How To Bake Bread`.
#[must_use]
pub fn title_from_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return SAVED_LINK.to_string();
    };

    let slug = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or_default();
    let slug = urlencoding::decode(slug).map_or_else(|_| slug.to_string(), |s| s.into_owned());
    let slug = FILE_EXTENSION.replace(&slug, "");
    let words = slug.replace(['-', '_'], " ");

    let title = title_case(&words);
    if title.is_empty() {
        parsed.host_str().unwrap_or(SAVED_LINK).to_string()
    } else {
        title
    }
}

/// First `max` characters of `text` (char-aware, never splits a code point).
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
