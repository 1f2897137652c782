//! # genie-github
//!
//! GitHub publishing for Repo Genie: create a repository under the
//! authenticated user, then commit a generated tree to it file by file.
//!
//! ## Overview
//!
//! - [`Publisher`] - The publish flow: identity, repository, sequential commits
//! - [`GithubClient`] - Token-authenticated client for the three REST calls involved
//! - [`PublishReport`] - What a successful run produced
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genie_core::FileNode;
//! use genie_github::Publisher;
//!
//! # async fn run() -> genie_core::Result<()> {
//! let tree = vec![FileNode::file("README.md", "# hello")];
//! let report = Publisher::new().publish("ghp_token", "hello-repo", &tree).await?;
//! println!("pushed {} files", report.files_committed);
//! # Ok(())
//! # }
//! ```
//!
//! Publishing is not transactional. A failed commit aborts the run, and the
//! files committed before it stay in the new repository.

pub mod client;
pub mod publish;
pub mod wire;

pub use client::{GITHUB_API_BASE, GithubClient};
pub use publish::{DEFAULT_BRANCH, PublishReport, Publisher};
pub use wire::{AuthenticatedUser, CommitIdentity, Repository};
