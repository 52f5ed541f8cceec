//! Configuration loaded from `~/.config/linkstash/config.toml` and the environment.
//!
//! Every field has a default, so both the file and all variables are optional.
//! Environment variables override the file. An empty variable counts as unset.
//!
//! ```toml
//! frontend_url = "https://stash.example.com"
//!
//! [gemini]
//! api_key = "..."
//! model = "gemini-2.0-flash"
//!
//! [media]
//! ytdlp_path = "/opt/bin/yt-dlp"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::site::{instagram, twitter};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_COHERE_MODEL: &str = "command-r";
pub const DEFAULT_COHERE_BASE_URL: &str = "https://api.cohere.com/v2";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Primary classification provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Missing key means the provider is skipped, not an error.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

/// Secondary classification provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CohereConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_COHERE_MODEL.to_string(),
            base_url: DEFAULT_COHERE_BASE_URL.to_string(),
        }
    }
}

/// Direct video URL lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub enabled: bool,
    /// Explicit yt-dlp binary; `None` searches `PATH`.
    pub ytdlp_path: Option<PathBuf>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ytdlp_path: None,
        }
    }
}

/// Platform API endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub instagram_oembed: String,
    pub twitter_oembed: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            instagram_oembed: instagram::OEMBED_ENDPOINT.to_string(),
            twitter_oembed: twitter::OEMBED_ENDPOINT.to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub cohere: CohereConfig,
    pub media: MediaConfig,
    pub endpoints: Endpoints,
    /// Dashboard link included in reply messages.
    pub frontend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            cohere: CohereConfig::default(),
            media: MediaConfig::default(),
            endpoints: Endpoints::default(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
        }
    }
}

impl Config {
    /// Load the default config file (if present) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a specific TOML file. No environment overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }

    /// Parse TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay environment-style variables read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(key) = get("GEMINI_API_KEY") {
            self.gemini.api_key = Some(key);
        }
        if let Some(model) = get("GEMINI_MODEL") {
            self.gemini.model = model;
        }
        if let Some(key) = get("COHERE_API_KEY") {
            self.cohere.api_key = Some(key);
        }
        if let Some(model) = get("COHERE_MODEL") {
            self.cohere.model = model;
        }
        if let Some(url) = get("FRONTEND_URL") {
            self.frontend_url = url;
        }
        if let Some(path) = get("LINKSTASH_YTDLP") {
            self.media.ytdlp_path = Some(PathBuf::from(path));
        }

        // Keys written as empty strings in the file are unset too
        self.gemini.api_key = self.gemini.api_key.take().filter(|k| !k.trim().is_empty());
        self.cohere.api_key = self.cohere.api_key.take().filter(|k| !k.trim().is_empty());
    }

    /// Drop both AI provider keys so classification runs fully offline.
    #[must_use]
    pub fn without_ai(mut self) -> Self {
        self.gemini.api_key = None;
        self.cohere.api_key = None;
        self
    }
}

/// Return the path to the config file.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linkstash").join("config.toml"))
}
