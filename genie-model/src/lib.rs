//! # genie-model
//!
//! Completion-provider integrations for Repo Genie.
//!
//! ## Overview
//!
//! This crate turns a project description into a raw model reply. It provides:
//!
//! - [`GroqClient`] - Groq chat-completions client with the fixed generation contract
//! - [`SYSTEM_INSTRUCTION`] - The instruction that pins replies to a JSON array
//! - [`MockModel`] - Scripted model for testing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genie_core::CompletionModel;
//! use genie_model::{GroqClient, GroqConfig};
//!
//! # async fn run() -> genie_core::Result<()> {
//! let api_key = std::env::var("GROQ_API_KEY").unwrap();
//! let client = GroqClient::new(GroqConfig::new(api_key))?;
//! let reply = client.complete("a todo app in react").await?;
//! println!("{:?}", reply.first_content());
//! # Ok(())
//! # }
//! ```
//!
//! The generation contract is fixed: `llama-3.3-70b-versatile` at temperature
//! 0.3 with an 8000-token budget. Callers vary only the prompt.

pub mod groq;
pub mod instruction;
pub mod mock;

pub use groq::{GroqClient, GroqConfig};
pub use instruction::SYSTEM_INSTRUCTION;
pub use mock::MockModel;
