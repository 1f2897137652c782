//! # genie-core
//!
//! Core types for Repo Genie: the project-tree model, the strict parser for
//! model output, and unified error handling.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions the rest of the
//! workspace builds on:
//!
//! - [`FileNode`] - A generated project tree of files and folders
//! - [`flatten`] / [`nest`] - Convert trees to committable path/content pairs and back
//! - [`parse_project_tree`] - Strict decoding of completion output into a tree
//! - [`CompletionModel`] - The trait a chat-completion provider implements
//! - [`GenieError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use genie_core::{flatten, parse_project_tree};
//!
//! let tree = parse_project_tree(
//!     r##"[{"type": "file", "name": "README.md", "content": "# demo"}]"##,
//! )?;
//! let files = flatten(&tree);
//! assert_eq!(files[0].path, "README.md");
//! # Ok::<(), genie_core::GenieError>(())
//! ```

pub mod completion;
pub mod error;
pub mod parse;
pub mod tree;

pub use completion::{
    ChatCompletion, ChatMessage, CompletionChoice, CompletionModel, CompletionUsage,
};
pub use error::{GenieError, Result};
pub use parse::parse_project_tree;
pub use tree::{FileNode, FlattenedFile, flatten, flatten_to_map, flatten_with_base, nest};
