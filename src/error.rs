//! Error types at the crate's public seams.
//!
//! Extraction never fails, so there is no extraction error. Provider errors
//! stay inside the classifier, where each one just advances the chain.

use thiserror::Error;

/// Why one classification provider produced no result.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider} API key not configured")]
    MissingKey { provider: &'static str },

    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Empty response")]
    EmptyResponse,

    #[error("Invalid classification JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input rejected before the pipeline runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("no URL found in message")]
    NoUrl,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
