//! Request wire shape for Groq's OpenAI-compatible chat-completions endpoint.

use genie_core::ChatMessage;
use serde::Serialize;

/// A chat-completion request. Every generation request carries exactly two
/// messages: the fixed system instruction and the user's description.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}
