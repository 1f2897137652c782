use anyhow::{Context, Result, bail};
use genie_core::flatten;
use std::path::{Component, Path};

use crate::tree_file::read_tree;

/// Materialize a saved tree under `out`.
pub fn run(files: &Path, out: &Path) -> Result<()> {
    let tree = read_tree(files)?;
    let flattened = flatten(&tree);

    for file in &flattened {
        check_relative(&file.path)?;
        let target = out.join(&file.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&target, &file.content)
            .with_context(|| format!("failed to write {}", target.display()))?;
    }

    println!("Wrote {} file(s) under {}", flattened.len(), out.display());
    Ok(())
}

/// Generated names come from a model reply, so a path must prove it stays
/// inside the output directory before it is written.
fn check_relative(path: &str) -> Result<()> {
    let stays_inside =
        Path::new(path).components().all(|component| matches!(component, Component::Normal(_)));
    if !stays_inside {
        bail!("refusing to write outside the output directory: {path}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_core::FileNode;

    #[test]
    fn test_writes_the_flattened_tree() {
        let dir = tempfile::tempdir().unwrap();
        let saved = dir.path().join("tree.json");
        let tree = vec![
            FileNode::folder("src", vec![FileNode::file("main.rs", "fn main() {}")]),
            FileNode::file("README.md", "# demo"),
        ];
        std::fs::write(&saved, serde_json::to_string(&tree).unwrap()).unwrap();

        let out = dir.path().join("out");
        run(&saved, &out).unwrap();

        assert_eq!(std::fs::read_to_string(out.join("src/main.rs")).unwrap(), "fn main() {}");
        assert_eq!(std::fs::read_to_string(out.join("README.md")).unwrap(), "# demo");
    }

    #[test]
    fn test_rejects_paths_that_leave_the_output_directory() {
        assert!(check_relative("src/main.rs").is_ok());
        assert!(check_relative("../escape.txt").is_err());
        assert!(check_relative("/etc/passwd").is_err());
    }
}
