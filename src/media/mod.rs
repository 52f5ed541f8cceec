//! Direct media URL resolution.
//!
//! A [`MediaResolver`] turns a post URL into a directly playable media URL
//! (typically an mp4). Resolution is best effort: any failure is `None` and
//! the caller moves on to the next resolver.
//!
//! Available resolvers, in the order Instagram extraction uses them:
//!
//! - [`MetaTagVideoResolver`]: reads `og:video*` tags while impersonating
//!   several link-preview crawlers
//! - [`YtDlpResolver`]: asks the `yt-dlp` binary for the mp4 stream URL

mod meta_tags;
mod ytdlp;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

pub use meta_tags::MetaTagVideoResolver;
pub use ytdlp::{YtDlpResolver, YTDLP_TIMEOUT};

/// Capability: resolve a post URL to a direct media URL.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Resolver name (e.g., "yt-dlp").
    fn name(&self) -> &'static str;

    /// Direct media URL for `url`, or `None` if this resolver cannot find one.
    async fn resolve(&self, url: &str) -> Option<String>;
}

/// Ordered list of resolvers. First hit wins.
#[derive(Clone, Default)]
pub struct MediaChain {
    resolvers: Vec<Arc<dyn MediaResolver>>,
}

impl MediaChain {
    #[must_use]
    pub fn new(resolvers: Vec<Arc<dyn MediaResolver>>) -> Self {
        Self { resolvers }
    }

    /// Try each resolver in order until one yields a URL.
    pub async fn resolve(&self, url: &str) -> Option<String> {
        for resolver in &self.resolvers {
            if let Some(media) = resolver.resolve(url).await {
                debug!("Media URL resolved by {}", resolver.name());
                return Some(media);
            }
            debug!("Resolver {} found no media for {}", resolver.name(), url);
        }
        None
    }

    /// Whether media lookup is disabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl std::fmt::Debug for MediaChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.resolvers.iter().map(|r| r.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed(Option<&'static str>, AtomicUsize);

    #[async_trait]
    impl MediaResolver for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn resolve(&self, _url: &str) -> Option<String> {
            self.1.fetch_add(1, Ordering::SeqCst);
            self.0.map(String::from)
        }
    }

    #[tokio::test]
    async fn empty_chain_resolves_nothing() {
        let chain = MediaChain::default();
        assert!(chain.is_empty());
        assert_eq!(chain.resolve("https://instagram.com/reel/x").await, None);
    }

    #[tokio::test]
    async fn first_hit_short_circuits() {
        let miss = Arc::new(Fixed(None, AtomicUsize::new(0)));
        let hit = Arc::new(Fixed(Some("https://cdn.example.com/a.mp4"), AtomicUsize::new(0)));
        let never = Arc::new(Fixed(Some("https://cdn.example.com/b.mp4"), AtomicUsize::new(0)));

        let resolvers: Vec<Arc<dyn MediaResolver>> = vec![miss.clone(), hit.clone(), never.clone()];
        let chain = MediaChain::new(resolvers);
        let media = chain.resolve("https://instagram.com/reel/x").await;

        assert_eq!(media.as_deref(), Some("https://cdn.example.com/a.mp4"));
        assert_eq!(miss.1.load(Ordering::SeqCst), 1);
        assert_eq!(hit.1.load(Ordering::SeqCst), 1);
        assert_eq!(never.1.load(Ordering::SeqCst), 0);
    }
}
