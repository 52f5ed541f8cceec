//! URL → [`Bookmark`] pipeline.
//!
//! Once a URL is accepted the pipeline always produces a bookmark: every
//! extraction and classification failure degrades internally. The only
//! errors a caller sees are "no URL" and "URL does not parse".

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use tracing::{info, instrument};
use url::Url;

use crate::bookmark::Bookmark;
use crate::classify::{Classifier, ClassifyInput};
use crate::config::Config;
use crate::error::IngestError;
use crate::reply;
use crate::site::ExtractorRouter;

static URL_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://[^\s]+").unwrap());

/// First `http(s)://` link in free text.
#[must_use]
pub fn find_url(text: &str) -> Option<&str> {
    URL_IN_TEXT.find(text).map(|m| m.as_str())
}

/// Accept an absolute `http`/`https` URL with a host.
pub fn validate_url(url: &str) -> Result<Url, IngestError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(IngestError::NoUrl);
    }

    let parsed = Url::parse(url).map_err(|_| IngestError::InvalidUrl(url.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(IngestError::InvalidUrl(url.to_string()));
    }
    Ok(parsed)
}

/// Extraction and classification wired together.
pub struct Pipeline {
    router: ExtractorRouter,
    classifier: Classifier,
}

impl Pipeline {
    #[must_use]
    pub fn new(router: ExtractorRouter, classifier: Classifier) -> Self {
        Self { router, classifier }
    }

    /// Standard extractors and the configured provider chain.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            ExtractorRouter::from_config(config)?,
            Classifier::from_config(config)?,
        ))
    }

    /// Save one submitted URL.
    #[instrument(skip(self))]
    pub async fn save(&self, url: &str) -> Result<Bookmark, IngestError> {
        validate_url(url)?;
        let url = url.trim();

        let content = self.router.extract(url).await;
        info!("Extracted {} content: {:?}", content.platform, content.title);

        let analysis = self
            .classifier
            .classify(&ClassifyInput {
                title: content.title.clone(),
                caption: content.caption.clone(),
                platform: content.platform,
                author: content.author.clone(),
                url: url.to_string(),
            })
            .await;

        let bookmark = Bookmark::assemble(url, content, analysis);
        info!("Bookmark ready: {:?} in {}", bookmark.title, bookmark.category);
        Ok(bookmark)
    }

    /// Save the first link in a chat message.
    pub async fn handle_message(&self, text: &str) -> Result<Bookmark, IngestError> {
        let url = find_url(text.trim()).ok_or(IngestError::NoUrl)?;
        self.save(url).await
    }

    /// Chat reply for a message: confirmation, guidance, or failure notice.
    pub async fn reply_to(&self, text: &str, frontend_url: &str) -> String {
        match self.handle_message(text).await {
            Ok(bookmark) => reply::saved_message(&bookmark, frontend_url),
            Err(IngestError::NoUrl) => reply::GUIDANCE.to_string(),
            Err(IngestError::InvalidUrl(_)) => reply::PROCESSING_FAILED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;
    use crate::content::ExtractedContent;
    use crate::platform::Platform;
    use crate::site::SiteExtractor;
    use async_trait::async_trait;

    struct Fixed(Platform, ExtractedContent);

    #[async_trait]
    impl SiteExtractor for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn platform(&self) -> Platform {
            self.0
        }

        async fn extract(&self, _url: &str) -> ExtractedContent {
            self.1.clone()
        }
    }

    fn pipeline(platform: Platform, content: ExtractedContent) -> Pipeline {
        let router = ExtractorRouter::new(vec![Box::new(Fixed(platform, content))]);
        Pipeline::new(router, Classifier::offline())
    }

    #[test]
    fn finds_first_url() {
        assert_eq!(
            find_url("look at this https://x.com/a/status/1 and http://b.c"),
            Some("https://x.com/a/status/1")
        );
        assert_eq!(find_url("HTTPS://EXAMPLE.COM/x"), Some("HTTPS://EXAMPLE.COM/x"));
        assert_eq!(find_url("no links here"), None);
        assert_eq!(find_url(""), None);
    }

    #[test]
    fn validates_urls() {
        assert!(validate_url("https://example.com/a").is_ok());
        assert_eq!(validate_url("  "), Err(IngestError::NoUrl));
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(IngestError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("not a url"),
            Err(IngestError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn message_without_url_gets_guidance() {
        let pipeline = pipeline(Platform::Article, ExtractedContent::default());
        assert_eq!(pipeline.handle_message("").await, Err(IngestError::NoUrl));
        assert_eq!(
            pipeline.reply_to("hello there", "http://localhost:3000").await,
            reply::GUIDANCE
        );
    }

    #[tokio::test]
    async fn fitness_reel_end_to_end() {
        let content = ExtractedContent {
            title: "coachjo's Reel".into(),
            caption: "5 minute leg workout for beginners #fitness #legday".into(),
            author: "coachjo".into(),
            ..Default::default()
        };
        let pipeline = pipeline(Platform::Instagram, content);

        let bookmark = pipeline
            .handle_message("check this https://www.instagram.com/reel/Cx7yZ1qLk9W/ 🔥")
            .await
            .unwrap();

        assert_eq!(bookmark.platform, Platform::Instagram);
        assert_eq!(bookmark.category, Category::Fitness);
        assert!(bookmark.tags.contains(&"legday".to_string()));
        assert_eq!(bookmark.embed_url, None);
        assert_eq!(bookmark.url, "https://www.instagram.com/reel/Cx7yZ1qLk9W/");
        // reels prefer the classifier's title
        assert!(bookmark.title.starts_with("5 minute leg workout for beginners"));
        assert!(!bookmark.title.contains("https"));
    }

    #[tokio::test]
    async fn degraded_article_still_saves() {
        let url = "https://blog.example.com/how-to-bake-bread";
        let content = crate::scrape::degraded_content(url);
        let pipeline = pipeline(Platform::Article, content);

        let bookmark = pipeline.save(url).await.unwrap();
        assert_eq!(bookmark.title, "How To Bake Bread");
        assert_eq!(bookmark.caption, "Saved from the web");
        assert_eq!(bookmark.category, Category::Cooking);
        assert!(bookmark.tags.contains(&"bake".to_string()));
    }

    #[tokio::test]
    async fn reply_confirms_save() {
        let content = ExtractedContent {
            title: "Rust Ownership Explained".into(),
            caption: "A guide to borrowing in rust".into(),
            ..Default::default()
        };
        let pipeline = pipeline(Platform::Article, content);
        let message = pipeline
            .reply_to("https://example.com/rust", "http://localhost:3000")
            .await;
        assert!(message.starts_with("📄 Got it!"));
        assert!(message.contains("📌 Title: Rust Ownership Explained"));
    }
}
