//! # genie-server
//!
//! The Repo Genie HTTP API.
//!
//! ## Overview
//!
//! Two JSON endpoints mirror the two halves of the pipeline, plus a health
//! probe:
//!
//! - `POST /api/generate` `{"prompt": "..."}` answers with the generated
//!   tree as a `FileNode` array
//! - `POST /api/upload` `{"accessToken", "repo", "files"}` publishes a tree
//!   and answers `{"success": true}`
//! - `GET /api/health` answers `OK`
//!
//! Failures answer `{"error": message}` with 400 for missing fields, 401 for
//! credential problems, 429 for provider rate limits, and 500 otherwise.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genie_server::{ServerConfig, create_app};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::new(); // add .with_model(...) to enable generation
//! let app = create_app(config);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod routes;

pub use config::{SecurityConfig, ServerConfig};
pub use error::ApiError;
pub use routes::create_app;
