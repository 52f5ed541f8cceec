//! `linkstash` - turn a shared link into a categorised bookmark
//!
//! # Features
//!
//! - **Platform extraction**: Instagram and Twitter/X via oEmbed, YouTube and
//!   articles via Open Graph / Twitter Card meta tags
//! - **Graceful degradation**: every extractor falls back to the meta-tag
//!   scraper, and the scraper falls back to a URL-derived placeholder
//! - **Direct media URLs**: bot-profile meta-tag probing, then `yt-dlp`
//! - **Classification**: Gemini, then Cohere, then an offline keyword classifier
//!
//! # Example
//!
//! ```rust,no_run
//! use linkstash::{Config, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = Pipeline::from_config(&Config::load()?)?;
//!     let bookmark = pipeline.save("https://www.instagram.com/reel/Cx7yZ1qLk9W/").await?;
//!     println!("{} [{}] {:?}", bookmark.title, bookmark.category, bookmark.tags);
//!     Ok(())
//! }
//! ```

pub mod bookmark;
pub mod classify;
pub mod config;
pub mod content;
pub mod error;
pub mod fingerprint;
pub mod http_client;
pub mod media;
pub mod normalize;
pub mod pipeline;
pub mod platform;
pub mod reply;
pub mod scrape;
pub mod site;
pub mod titles;

pub use bookmark::Bookmark;
pub use classify::{Category, ClassificationResult, Classifier, ClassifyInput};
pub use config::Config;
pub use content::ExtractedContent;
pub use error::{IngestError, ProviderError};
pub use fingerprint::BrowserProfile;
pub use http_client::FetchClient;
pub use media::{MediaChain, MediaResolver};
pub use pipeline::{find_url, Pipeline};
pub use platform::{detect, Platform};
pub use scrape::MetaTagScraper;
pub use site::{ExtractorRouter, SiteExtractor};

/// Version of linkstash
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
