//! # genie-generator
//!
//! The generation pipeline for Repo Genie: credential resolution plus the
//! prompt-to-tree flow.
//!
//! ## Overview
//!
//! - [`ProjectGenerator`] - Runs a completion request and strictly parses the
//!   reply into a project tree
//! - [`resolve_api_key`] / [`ApiKeyStore`] - The three-source credential
//!   chain: explicit key, `GROQ_API_KEY`, stored key
//! - [`generate_project`] - The whole flow in one call
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genie_generator::generate_project;
//!
//! # async fn run() -> genie_core::Result<()> {
//! let tree = generate_project("a todo app in react", None).await?;
//! println!("{} top-level nodes", tree.len());
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod generator;

pub use credentials::{API_KEY_ENV, ApiKeyStore, resolve_api_key, resolve_default};
pub use generator::{ProjectGenerator, generate_project};
