//! Property tests for tree flattening and re-nesting.

use genie_core::{FileNode, flatten, flatten_to_map, nest};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}(\\.[a-z]{1,4})?".prop_map(String::from)
}

fn arb_content() -> impl Strategy<Value = String> {
    "[ -~\\n]{0,60}".prop_map(String::from)
}

/// Trees where every file carries content and every folder has at least one
/// child. Flattening such a tree loses nothing, so it can be inverted.
fn arb_full_tree() -> impl Strategy<Value = Vec<FileNode>> {
    let leaf = (arb_name(), arb_content()).prop_map(|(name, content)| FileNode::file(name, content));
    let node = leaf.prop_recursive(3, 24, 4, |inner| {
        (arb_name(), prop::collection::vec(inner, 1..4))
            .prop_map(|(name, children)| FileNode::folder(name, children))
    });
    prop::collection::vec(node, 1..5).prop_map(with_unique_sibling_names)
}

/// Trees that also allow content-less files and empty folders, the shapes a
/// model reply may legally contain.
fn arb_loose_tree() -> impl Strategy<Value = Vec<FileNode>> {
    let leaf = (arb_name(), proptest::option::of(arb_content()))
        .prop_map(|(name, content)| match content {
            Some(content) => FileNode::file(name, content),
            None => FileNode::empty_file(name),
        });
    let node = leaf.prop_recursive(3, 24, 4, |inner| {
        (arb_name(), prop::collection::vec(inner, 0..4))
            .prop_map(|(name, children)| FileNode::folder(name, children))
    });
    prop::collection::vec(node, 0..5).prop_map(with_unique_sibling_names)
}

/// Rename collisions away so every folder has unique child names, the same
/// invariant a real generated tree is expected to hold.
fn with_unique_sibling_names(mut nodes: Vec<FileNode>) -> Vec<FileNode> {
    fn fix(nodes: &mut Vec<FileNode>) {
        let mut seen = HashSet::new();
        for (idx, node) in nodes.iter_mut().enumerate() {
            let name = match node {
                FileNode::File { name, .. } | FileNode::Folder { name, .. } => name,
            };
            let mut candidate = name.clone();
            while !seen.insert(candidate.clone()) {
                candidate = format!("{candidate}-{idx}");
            }
            *name = candidate;
            if let FileNode::Folder { children, .. } = node {
                fix(children);
            }
        }
    }
    fix(&mut nodes);
    nodes
}

fn committable_files(nodes: &[FileNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            FileNode::File { content: Some(_), .. } => 1,
            FileNode::File { content: None, .. } => 0,
            FileNode::Folder { children, .. } => committable_files(children),
        })
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Flattening then re-nesting a lossless tree reproduces it exactly,
    /// names, sibling order, and content included.
    #[test]
    fn nest_inverts_flatten(tree in arb_full_tree()) {
        let files = flatten(&tree);
        prop_assert_eq!(nest(&files), tree);
    }

    /// Every flattened entry comes from exactly one content-bearing file
    /// node; content-less files and folders never produce entries.
    #[test]
    fn flatten_emits_one_entry_per_committable_file(tree in arb_loose_tree()) {
        prop_assert_eq!(flatten(&tree).len(), committable_files(&tree));
    }

    /// Flattening is stable across a nest round trip even for trees that
    /// lose degenerate nodes on the way.
    #[test]
    fn flatten_is_stable_after_renesting(tree in arb_loose_tree()) {
        let files = flatten(&tree);
        prop_assert_eq!(flatten(&nest(&files)), files);
    }

    /// With unique sibling names, no two files flatten to the same path.
    #[test]
    fn flattened_paths_are_unique(tree in arb_loose_tree()) {
        let files = flatten(&tree);
        prop_assert_eq!(flatten_to_map(&tree).len(), files.len());
    }
}
