//! Classification prompt shared by every LLM provider.

use std::sync::LazyLock;

use super::category::vocabulary;
use super::ClassifyInput;
use crate::titles::truncate_chars;

/// Characters of analysis text sent to a provider.
pub const MAX_PROMPT_CONTENT: usize = 1000;

/// Sampling temperature for every provider.
pub const TEMPERATURE: f32 = 0.3;

/// Output token limit for every provider.
pub const MAX_OUTPUT_TOKENS: u32 = 200;

/// System instruction demanding a strict JSON object.
pub static SYSTEM_PROMPT: LazyLock<String> = LazyLock::new(|| {
    format!(
        r#"You are a content classifier for a bookmarking app. Given social media content (caption, title, URL), respond ONLY with valid JSON (no markdown, no code fences):
{{
  "title": "A 4-10 word descriptive title based on the actual content",
  "category": "exactly one of: {vocab}",
  "tags": ["tag1", "tag2", "tag3"],
  "summary": "One or two neutral sentences summarizing the content."
}}

RULES:
- The title MUST describe what the content is about, using keywords from the caption.
- The title must NOT start with a platform or format word (Instagram, Reel, Post, Video, Tweet) and must not be clickbait.
- NEVER use generic titles like "Instagram Reel" or "Social Media Post".
- The category MUST be exactly one value from the list above.
- Tags: 3 to 6, lowercase, no '#'. Prefer hashtags that appear in the caption. Never use engagement words like viral, trending, fyp, foryou, explorepage, follow, like, share, reels, instagood, love.
- The summary MUST include important words from the caption so it is searchable later.
- If the caption is empty, infer meaning from the URL or author name."#,
        vocab = vocabulary()
    )
});

/// Per-request user message.
#[must_use]
pub fn user_message(text: &str, input: &ClassifyInput) -> String {
    let mut message = format!("Platform: {}\n", input.platform);
    if !input.author.trim().is_empty() {
        message.push_str(&format!("Author: {}\n", input.author.trim()));
    }
    message.push_str("Content: ");
    message.push_str(truncate_chars(text, MAX_PROMPT_CONTENT));
    message
}

/// System instruction and user message in one block, for single-turn APIs.
#[must_use]
pub fn combined_prompt(text: &str, input: &ClassifyInput) -> String {
    format!("{}\n\n{}", *SYSTEM_PROMPT, user_message(text, input))
}
