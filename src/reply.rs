//! Chat replies sent back to the person who shared a link.

use crate::bookmark::Bookmark;
use crate::platform::Platform;

/// Reply when a message carries no link.
pub const GUIDANCE: &str = "👋 Hey! Send me a link (Instagram, Twitter, or any article) and I'll save it to your dashboard!\n\nTry sending an Instagram Reel or Post link.";

/// Reply when the link in a message could not be processed.
pub const PROCESSING_FAILED: &str =
    "⚠️ I couldn't process that link. Please check the URL and try again.";

fn platform_emoji(platform: Platform) -> &'static str {
    match platform {
        Platform::Instagram => "📸",
        Platform::Twitter => "🐦",
        Platform::YouTube => "🎬",
        Platform::Article => "📄",
    }
}

/// Confirmation message for a saved bookmark.
#[must_use]
pub fn saved_message(bookmark: &Bookmark, frontend_url: &str) -> String {
    let tags = if bookmark.tags.is_empty() {
        "none".to_string()
    } else {
        bookmark.tags.join(", ")
    };

    format!(
        "{emoji} Got it! Saved to your *{category}* bucket.\n\n\
         📌 Title: {title}\n\
         📂 Category: {category}\n\n\
         📝 {summary}\n\n\
         🏷️ Tags: {tags}\n\n\
         View your saved links at: {frontend_url}",
        emoji = platform_emoji(bookmark.platform),
        category = bookmark.category,
        title = bookmark.title,
        summary = bookmark.summary,
    )
}
