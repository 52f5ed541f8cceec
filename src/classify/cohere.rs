//! Cohere v2 chat provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::prompt::{user_message, MAX_OUTPUT_TOKENS, SYSTEM_PROMPT, TEMPERATURE};
use super::response::parse_classification;
use super::{provider_client, ClassificationProvider, ClassificationResult, ClassifyInput};
use crate::config::CohereConfig;
use crate::error::ProviderError;

// ============================================================================
// Cohere Chat Request/Response Types
// ============================================================================

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize, Debug)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Secondary provider.
#[derive(Clone, Debug)]
pub struct CohereProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl CohereProvider {
    pub fn new(config: &CohereConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: provider_client()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ClassificationProvider for CohereProvider {
    fn name(&self) -> &'static str {
        "cohere"
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
            .ok_or(ProviderError::MissingKey { provider: "cohere" })?;

        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT.clone(),
                },
                Message {
                    role: "user",
                    content: user_message(text, input),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .bearer_auth(api_key)
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

        let chat: ChatResponse = response.json().await?;
        let raw = chat
            .message
            .and_then(|m| m.content.into_iter().next())
            .map(|c| c.text)
            .ok_or(ProviderError::EmptyResponse)?;

        debug!("Cohere model {} returned {} chars", self.model, raw.len());
        parse_classification(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_shape_matches_v2_chat() {
        let body = ChatRequest {
            model: "command-r",
            messages: vec![Message {
                role: "user",
                content: "hi".to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "command-r");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 200);
    }

    #[test]
    fn reads_first_content_block() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"message":{"role":"assistant","content":[{"type":"text","text":"{}"}]}}"#,
        )
        .unwrap();
        let text = parsed.message.unwrap().content.into_iter().next().unwrap().text;
        assert_eq!(text, "{}");
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let provider = CohereProvider::new(&CohereConfig::default()).unwrap();
        assert!(!provider.is_configured());
        assert!(matches!(
            provider.attempt("t", &ClassifyInput::default()).await,
            Err(ProviderError::MissingKey { .. })
        ));
    }
}
