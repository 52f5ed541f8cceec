//! Merge of extractor output with classifier output.
//!
//! Extractors and the classifier each produce a title; this module decides
//! which one a bookmark keeps, using the single junk-title predicate in
//! [`crate::titles`].

use crate::classify::{Category, ClassificationResult};
use crate::content::ExtractedContent;
use crate::platform::{is_reel_path, Platform};
use crate::titles::{is_generic_instagram_title, is_placeholder_title, UNTITLED};

/// Final bookmark title.
///
/// - Instagram reels: a non-empty classifier title always wins.
/// - Otherwise the extractor title is kept unless it is junk, in which case
///   the classifier title is used, then the extractor title, then `Untitled`.
/// - A surviving `Instagram Reel`/`Instagram Post` becomes `"{author}'s Reel"`
///   or the classifier title.
#[must_use]
pub fn resolve_title(content: &ExtractedContent, url: &str, ai: &ClassificationResult) -> String {
    let is_reel = content.platform == Platform::Instagram && is_reel_path(url);
    let extracted = content.title.trim();
    let suggested = ai.title.trim();

    let title = if is_reel && !suggested.is_empty() {
        suggested
    } else if !is_placeholder_title(extracted) {
        extracted
    } else if !suggested.is_empty() {
        suggested
    } else if !extracted.is_empty() {
        extracted
    } else {
        UNTITLED
    };

    if !title.is_empty() && !is_generic_instagram_title(title) {
        return title.to_string();
    }

    let author = content.author.trim();
    if !author.is_empty() {
        let kind = if is_reel_path(url) { "Reel" } else { "Post" };
        format!("{author}'s {kind}")
    } else if !suggested.is_empty() && !is_generic_instagram_title(suggested) {
        suggested.to_string()
    } else {
        UNTITLED.to_string()
    }
}

/// Category from a provider's free-text answer, coerced to `Uncategorized`
/// outside the vocabulary.
#[must_use]
pub fn resolve_category(raw: &str) -> Category {
    Category::resolve(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(platform: Platform, title: &str, author: &str) -> ExtractedContent {
        ExtractedContent {
            platform,
            title: title.to_string(),
            author: author.to_string(),
            ..Default::default()
        }
    }

    fn ai(title: &str) -> ClassificationResult {
        ClassificationResult {
            title: title.to_string(),
            ..Default::default()
        }
    }

    const REEL: &str = "https://www.instagram.com/reel/Cx7yZ1qLk9W/";
    const POST: &str = "https://www.instagram.com/p/Cx7yZ1qLk9W/";

    #[test]
    fn reel_prefers_classifier_title() {
        let c = content(Platform::Instagram, "Creamy pasta in 15 minutes", "chefmaria");
        assert_eq!(
            resolve_title(&c, REEL, &ai("Creamy Garlic Pasta Recipe")),
            "Creamy Garlic Pasta Recipe"
        );
    }

    #[test]
    fn reel_keeps_own_title_without_classifier_title() {
        let c = content(Platform::Instagram, "chefmaria's Reel", "chefmaria");
        assert_eq!(resolve_title(&c, REEL, &ai("")), "chefmaria's Reel");
    }

    #[test]
    fn good_extractor_title_is_kept() {
        let c = content(Platform::Article, "How To Bake Bread", "");
        assert_eq!(
            resolve_title(&c, "https://blog.example.com/how-to-bake-bread", &ai("Bread Guide")),
            "How To Bake Bread"
        );
    }

    #[test]
    fn junk_titles_are_replaced() {
        for junk in ["", "Untitled", "Cx7yZ1qLk9W", "%%title%%", "instagram post"] {
            let c = content(Platform::Twitter, junk, "");
            assert_eq!(
                resolve_title(&c, "https://x.com/a/status/1", &ai("Rust Async Tips")),
                "Rust Async Tips",
                "junk title {junk:?}"
            );
        }
    }

    #[test]
    fn junk_title_without_classifier_title() {
        let c = content(Platform::Article, "", "");
        assert_eq!(resolve_title(&c, "https://a.b", &ai("")), UNTITLED);

        let c = content(Platform::Article, "Cx7yZ1qLk9W", "");
        assert_eq!(resolve_title(&c, "https://a.b", &ai("")), "Cx7yZ1qLk9W");
    }

    #[test]
    fn generic_instagram_title_names_the_author() {
        let c = content(Platform::Instagram, "Instagram Post", "chefmaria");
        assert_eq!(resolve_title(&c, POST, &ai("")), "chefmaria's Post");

        let c = content(Platform::Instagram, "Instagram Reel", "");
        assert_eq!(resolve_title(&c, REEL, &ai("Instagram Reel")), UNTITLED);
    }

    #[test]
    fn category_outside_vocabulary_is_uncategorized() {
        assert_eq!(resolve_category("Cooking"), Category::Cooking);
        assert_eq!(resolve_category(" cooking "), Category::Cooking);
        assert_eq!(resolve_category("Memes"), Category::Uncategorized);
        assert_eq!(resolve_category("Food & Drink"), Category::Uncategorized);
    }
}
