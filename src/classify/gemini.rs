//! Google Gemini `generateContent` provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::prompt::{combined_prompt, MAX_OUTPUT_TOKENS, TEMPERATURE};
use super::response::parse_classification;
use super::{provider_client, ClassificationProvider, ClassificationResult, ClassifyInput};
use crate::config::GeminiConfig;
use crate::error::ProviderError;

// ============================================================================
// Gemini Request/Response Types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

/// Primary provider.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    pub fn new(config: &GeminiConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: provider_client()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ClassificationProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip_all, fields(model = %self.model))]
    async fn attempt(
        &self,
        text: &str,
        input: &ClassifyInput,
    ) -> Result<ClassificationResult, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingKey { provider: "gemini" })?;

        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: combined_prompt(text, input),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let gemini_response: GeminiResponse = response.json().await?;
        let raw = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        debug!("Gemini model {} returned {} chars", self.model, raw.len());
        parse_classification(&raw)
    }
}
