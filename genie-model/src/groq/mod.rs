//! Groq provider implementation.
//!
//! Project generation runs against Groq's OpenAI-compatible chat-completions
//! endpoint with a fixed contract: `llama-3.3-70b-versatile`, temperature
//! 0.3, an 8000-token output budget, and the system instruction from
//! [`crate::instruction`]. Only the API key and base URL vary between
//! deployments.
//!
//! # Example
//!
//! ```rust,ignore
//! use genie_model::groq::{GroqClient, GroqConfig};
//!
//! let client = GroqClient::new(GroqConfig::new(
//!     std::env::var("GROQ_API_KEY").unwrap()
//! ))?;
//! ```

mod client;
mod config;
mod wire;

pub use client::GroqClient;
pub use config::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, GROQ_API_BASE, GroqConfig,
};
pub use wire::ChatCompletionRequest;
