use anyhow::{Context, Result};
use genie_github::Publisher;
use std::path::Path;

use crate::tree_file::read_tree;

/// Environment variable consulted when `--token` is not given.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Create the repository and push a saved tree to it.
pub async fn run(repo: &str, token: Option<String>, files: &Path) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => {
            std::env::var(TOKEN_ENV).with_context(|| format!("pass --token or set {TOKEN_ENV}"))?
        }
    };

    let tree = read_tree(files)?;
    let report = Publisher::new().publish(&token, repo, &tree).await?;

    println!(
        "Created {}/{} with {} file(s) committed",
        report.owner, report.repository, report.files_committed
    );
    if let Some(url) = report.html_url {
        println!("{url}");
    }

    Ok(())
}
