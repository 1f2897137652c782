//! Groq client implementation.

use super::config::{GROQ_API_BASE, GroqConfig};
use super::wire::ChatCompletionRequest;
use crate::instruction::SYSTEM_INSTRUCTION;
use async_trait::async_trait;
use genie_core::{ChatCompletion, ChatMessage, CompletionModel, GenieError, Result};
use reqwest::{Client, StatusCode};

/// Groq client for project generation.
///
/// Sends one request per generation, no retries and no streaming. A rate
/// limit or provider outage surfaces as a typed error so the caller can
/// decide what to do with it.
///
/// # Example
///
/// ```rust,ignore
/// use genie_model::groq::{GroqClient, GroqConfig};
///
/// let client = GroqClient::new(GroqConfig::new(
///     std::env::var("GROQ_API_KEY").unwrap()
/// ))?;
/// ```
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    /// Create a new Groq client.
    pub fn new(config: GroqConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GenieError::Unexpected(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a client with the standard generation parameters for the
    /// given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(GroqConfig::new(api_key))
    }

    /// Build the API URL for chat completions.
    fn api_url(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(GROQ_API_BASE);
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }

    /// Build a chat completion request for the given project description.
    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(prompt)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionModel for GroqClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<ChatCompletion> {
        let api_url = self.api_url();
        let chat_request = self.build_request(prompt);

        tracing::debug!(model = %self.config.model, "sending chat completion request");

        let response = self
            .client
            .post(&api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| GenieError::Unexpected(format!("Groq API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => GenieError::RateLimited(error_text),
                StatusCode::INTERNAL_SERVER_ERROR => GenieError::ProviderUnavailable(error_text),
                _ => GenieError::Provider { status: status.to_string(), detail: error_text },
            });
        }

        response
            .json::<ChatCompletion>()
            .await
            .map_err(|e| GenieError::Unexpected(format!("Failed to decode Groq response: {e}")))
    }
}
