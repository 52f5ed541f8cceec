//! `og:video` discovery under crawler impersonation.

use async_trait::async_trait;
use tracing::debug;

use super::MediaResolver;
use crate::fingerprint::{BrowserProfile, VIDEO_DISCOVERY_PROFILES};
use crate::scrape::MetaTagScraper;

/// Scrapes video meta tags, retrying under several crawler identities.
///
/// Instagram renders `og:video` for some crawlers and not others, so each
/// profile is tried in turn until one page exposes a video URL.
#[derive(Debug, Clone)]
pub struct MetaTagVideoResolver {
    scraper: MetaTagScraper,
    profiles: Vec<BrowserProfile>,
}

impl MetaTagVideoResolver {
    /// Resolver using the default crawler rotation.
    #[must_use]
    pub fn new(scraper: MetaTagScraper) -> Self {
        Self {
            scraper,
            profiles: VIDEO_DISCOVERY_PROFILES.to_vec(),
        }
    }

    /// Override the identities tried, in order.
    #[must_use]
    pub fn with_profiles(mut self, profiles: Vec<BrowserProfile>) -> Self {
        self.profiles = profiles;
        self
    }
}

#[async_trait]
impl MediaResolver for MetaTagVideoResolver {
    fn name(&self) -> &'static str {
        "meta-tags"
    }

    async fn resolve(&self, url: &str) -> Option<String> {
        for profile in &self.profiles {
            match self.scraper.page_meta(url, profile).await {
                Ok(meta) => {
                    if let Some(video) = meta.video {
                        debug!("og:video found as {}", profile.name);
                        return Some(video);
                    }
                }
                Err(e) => debug!("Video scrape as {} failed: {:#}", profile.name, e),
            }
        }
        None
    }
}
