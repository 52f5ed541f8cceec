//! Platform-specific content extraction.
//!
//! Each platform prefers its native embed API and degrades to the generic
//! meta-tag scraper, so extraction always produces *some* record.
//!
//! # Architecture
//!
//! - [`SiteExtractor`]: Async trait for platform-specific extraction
//! - [`ExtractorRouter`]: Detects the platform and dispatches to its extractor
//! - [`ExtractedContent`](crate::content::ExtractedContent): The shared output shape
//!
//! # Example
//!
//! ```rust,no_run
//! use linkstash::site::ExtractorRouter;
//! use linkstash::Config;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let router = ExtractorRouter::from_config(&Config::default())?;
//! let content = router.extract("https://x.com/user/status/123").await;
//! println!("{} by {}", content.title, content.author);
//! # Ok(())
//! # }
//! ```

pub mod article;
pub mod instagram;
pub mod twitter;
pub mod youtube;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::content::ExtractedContent;
use crate::http_client::FetchClient;
use crate::media::{MediaChain, MediaResolver, MetaTagVideoResolver, YtDlpResolver};
use crate::platform::{detect, Platform};
use crate::scrape::MetaTagScraper;

/// Extractor for one platform.
#[async_trait]
pub trait SiteExtractor: Send + Sync {
    /// Extractor name (e.g., "twitter", "youtube").
    fn name(&self) -> &'static str;

    /// Platform this extractor handles.
    fn platform(&self) -> Platform;

    /// Extract content from the URL. Never fails: exhausted strategies
    /// degrade to a placeholder record.
    async fn extract(&self, url: &str) -> ExtractedContent;
}

/// Routes URLs to the extractor for their platform.
pub struct ExtractorRouter {
    extractors: Vec<Box<dyn SiteExtractor>>,
}

impl ExtractorRouter {
    /// Router from an explicit extractor list. [`Platform::Article`] must be present
    /// for unknown URLs to be handled.
    #[must_use]
    pub fn new(extractors: Vec<Box<dyn SiteExtractor>>) -> Self {
        Self { extractors }
    }

    /// Build the standard extractor set with a shared HTTP client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = FetchClient::new()?;
        let scraper = MetaTagScraper::new(client.clone());

        let mut resolvers: Vec<Arc<dyn MediaResolver>> = Vec::new();
        if config.media.enabled {
            resolvers.push(Arc::new(MetaTagVideoResolver::new(scraper.clone())));
            let ytdlp = match &config.media.ytdlp_path {
                Some(path) => YtDlpResolver::new().with_binary_path(path),
                None => YtDlpResolver::new(),
            };
            resolvers.push(Arc::new(ytdlp));
        }

        let extractors: Vec<Box<dyn SiteExtractor>> = vec![
            Box::new(instagram::InstagramExtractor::new(
                client.clone(),
                scraper.clone(),
                config.endpoints.instagram_oembed.clone(),
                MediaChain::new(resolvers),
            )),
            Box::new(twitter::TwitterExtractor::new(
                client,
                scraper.clone(),
                config.endpoints.twitter_oembed.clone(),
            )),
            Box::new(youtube::YouTubeExtractor::new(scraper.clone())),
            Box::new(article::ArticleExtractor::new(scraper)),
        ];

        Ok(Self::new(extractors))
    }

    /// Detect the platform, run its extractor, and stamp the result.
    ///
    /// The returned record always carries the detected platform and a
    /// caption no longer than 500 characters.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn extract(&self, url: &str) -> ExtractedContent {
        let platform = detect(url);
        self.extract_as(url, platform).await
    }

    /// Run the extractor for a known platform.
    pub async fn extract_as(&self, url: &str, platform: Platform) -> ExtractedContent {
        let extractor = self
            .extractors
            .iter()
            .find(|e| e.platform() == platform)
            .or_else(|| {
                self.extractors
                    .iter()
                    .find(|e| e.platform() == Platform::Article)
            });

        let mut content = match extractor {
            Some(extractor) => {
                debug!("Matched site extractor: {}", extractor.name());
                extractor.extract(url).await
            }
            None => crate::scrape::degraded_content(url),
        };

        content.platform = platform;
        content.cap_caption();
        content
    }
}
