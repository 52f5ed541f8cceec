//! Generic article extraction: meta tags only.

use async_trait::async_trait;

use super::SiteExtractor;
use crate::content::ExtractedContent;
use crate::platform::Platform;
use crate::scrape::MetaTagScraper;
use crate::titles::{title_from_url, UNTITLED};

/// Default extractor for any URL without a dedicated platform.
pub struct ArticleExtractor {
    scraper: MetaTagScraper,
}

impl ArticleExtractor {
    #[must_use]
    pub fn new(scraper: MetaTagScraper) -> Self {
        Self { scraper }
    }
}

#[async_trait]
impl SiteExtractor for ArticleExtractor {
    fn name(&self) -> &'static str {
        "article"
    }

    fn platform(&self) -> Platform {
        Platform::Article
    }

    async fn extract(&self, url: &str) -> ExtractedContent {
        let mut content = self.scraper.scrape(url).await;
        if content.title == UNTITLED {
            content.title = title_from_url(url);
        }
        content
    }
}
