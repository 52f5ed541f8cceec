//! Content classification: title, category, tags, and summary.
//!
//! # Architecture
//!
//! - [`ClassificationProvider`]: Async trait for one LLM backend
//! - [`Classifier`]: Tries providers in order, then the offline keyword floor
//! - [`keywords::classify_offline`]: Deterministic fallback with no I/O
//!
//! Every provider failure (missing key, network error, timeout, non-2xx,
//! malformed JSON) advances the chain. [`Classifier::classify`] always
//! returns a usable result.
//!
//! # Example
//!
//! ```rust
//! use linkstash::classify::{Category, Classifier, ClassifyInput};
//! use linkstash::Platform;
//!
//! # async fn example() {
//! let classifier = Classifier::offline();
//! let result = classifier
//!     .classify(&ClassifyInput {
//!         caption: "5 minute leg workout #fitness".into(),
//!         platform: Platform::Instagram,
//!         ..Default::default()
//!     })
//!     .await;
//! assert_eq!(result.category, Category::Fitness);
//! # }
//! ```

pub mod category;
pub mod cohere;
pub mod gemini;
pub mod keywords;
pub mod prompt;
pub mod response;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

pub use category::Category;
pub use cohere::CohereProvider;
pub use gemini::GeminiProvider;

use crate::config::Config;
use crate::error::ProviderError;
use crate::platform::Platform;
use crate::titles::is_placeholder_title;

/// Per-call timeout for provider requests.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(15);

/// Summary returned when there is nothing to classify.
pub const NO_CONTENT_SUMMARY: &str = "No content available to summarize.";

/// Classifier output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub title: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub summary: String,
}

/// What is known about a piece of content before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyInput {
    pub title: String,
    pub caption: String,
    pub platform: Platform,
    pub author: String,
    pub url: String,
}

impl ClassifyInput {
    /// Caption, title, and URL joined by spaces, skipping empty parts.
    #[must_use]
    pub fn analysis_text(&self) -> String {
        [&self.caption, &self.title, &self.url]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One step of the provider chain.
#[async_trait]
pub trait ClassificationProvider: Send + Sync {
    /// Provider name for logs.
    fn name(&self) -> &'static str;

    /// Whether a credential is present. Unconfigured providers are skipped.
    fn is_configured(&self) -> bool;

    /// Classify `text`. Any error moves the chain to the next provider.
    async fn attempt(
        &self,
        text: &str,
        input: &ClassifyInput,
    ) -> Result<ClassificationResult, ProviderError>;
}

/// Ordered provider chain with a deterministic floor.
pub struct Classifier {
    providers: Vec<Box<dyn ClassificationProvider>>,
}

impl Classifier {
    #[must_use]
    pub fn new(providers: Vec<Box<dyn ClassificationProvider>>) -> Self {
        Self { providers }
    }

    /// Keyword classification only. Never touches the network.
    #[must_use]
    pub fn offline() -> Self {
        Self::new(Vec::new())
    }

    /// Gemini first, Cohere second, each skipped when its key is absent.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let providers: Vec<Box<dyn ClassificationProvider>> = vec![
            Box::new(GeminiProvider::new(&config.gemini)?),
            Box::new(CohereProvider::new(&config.cohere)?),
        ];
        Ok(Self::new(providers))
    }

    /// Names of providers that will actually be tried.
    #[must_use]
    pub fn active_providers(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .filter(|p| p.is_configured())
            .map(|p| p.name())
            .collect()
    }

    /// Classify content. Never fails.
    #[instrument(skip_all, fields(platform = %input.platform))]
    pub async fn classify(&self, input: &ClassifyInput) -> ClassificationResult {
        let text = input.analysis_text();
        if text.is_empty() {
            return ClassificationResult {
                summary: NO_CONTENT_SUMMARY.to_string(),
                ..Default::default()
            };
        }

        for provider in &self.providers {
            if !provider.is_configured() {
                debug!("Skipping {}: no API key", provider.name());
                continue;
            }

            match provider.attempt(&text, input).await {
                Ok(mut result) => {
                    info!("Classified by {}", provider.name());
                    if is_placeholder_title(&result.title) {
                        result.title =
                            keywords::classify_offline(&text, input.platform, &input.url).title;
                    }
                    return result;
                }
                Err(e) => warn!("{} failed: {}", provider.name(), e),
            }
        }

        info!("All AI providers unavailable, using keyword fallback");
        keywords::classify_offline(&text, input.platform, &input.url)
    }
}

/// HTTP client for provider calls.
pub(crate) fn provider_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(PROVIDER_TIMEOUT)
        .build()
}
