//! Reading trees saved by `genie generate --save`.

use anyhow::{Context, Result};
use genie_core::FileNode;
use std::path::Path;

pub fn read_tree(path: &Path) -> Result<Vec<FileNode>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} does not contain a valid project tree", path.display()))
}
