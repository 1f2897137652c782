use anyhow::{Context, Result};
use genie_core::flatten;
use genie_generator::generate_project;
use std::path::Path;

/// Run the generation pipeline and print the resulting layout.
pub async fn run(prompt: &str, api_key: Option<&str>, save: Option<&Path>) -> Result<()> {
    let tree = generate_project(prompt, api_key).await?;
    let files = flatten(&tree);

    println!("Generated {} top-level node(s), {} committable file(s):", tree.len(), files.len());
    for file in &files {
        println!("  {}", file.path);
    }

    if let Some(path) = save {
        let json = serde_json::to_string_pretty(&tree)?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        println!("Saved tree to {}", path.display());
    }

    Ok(())
}
