use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A chat message in the OpenAI-compatible wire shape used by Groq.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: Some(content.into()) }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: Some(content.into()) }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".to_string(), content: Some(content.into()) }
    }
}

/// A chat-completion response, kept as the provider sent it.
///
/// Downstream stages only read the first choice's message text; everything
/// else rides along for logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub choices: Vec<CompletionChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<CompletionUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub message: Option<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

impl ChatCompletion {
    /// A response with a single assistant message. Used by scripted models
    /// in tests.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            id: None,
            model: None,
            choices: vec![CompletionChoice {
                message: Some(ChatMessage::assistant(content)),
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        }
    }

    /// Text of the first choice's message, if the provider sent one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
    }
}

/// A chat-completion provider.
///
/// Implementations own their credential and request plumbing; the generation
/// pipeline only hands them a prompt and inspects the reply.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Model identifier, used in logs.
    fn name(&self) -> &str;

    /// Send one prompt through the fixed generation contract and return the
    /// provider's reply. No retries: rate limits and outages surface to the
    /// caller as errors.
    async fn complete(&self, prompt: &str) -> Result<ChatCompletion>;
}
