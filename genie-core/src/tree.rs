use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in a generated project tree.
///
/// Trees arrive as JSON arrays of nodes, the shape the completion model is
/// instructed to produce:
///
/// ```json
/// [
///   {"type": "folder", "name": "src", "children": [
///     {"type": "file", "name": "main.rs", "content": "fn main() {}", "language": "rust"}
///   ]},
///   {"type": "file", "name": "README.md", "content": "# demo", "language": "markdown"}
/// ]
/// ```
///
/// The `type` tag decides the variant, so a file can never carry children and
/// a folder can never carry content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    File {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        /// Syntax-highlighting hint ("rust", "json", "markdown", ...).
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Folder {
        name: String,
        /// A folder with no `children` key decodes as an empty folder.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<FileNode>,
    },
}

impl FileNode {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        FileNode::File { name: name.into(), content: Some(content.into()), language: None }
    }

    /// A file node without content. Flattening skips these.
    pub fn empty_file(name: impl Into<String>) -> Self {
        FileNode::File { name: name.into(), content: None, language: None }
    }

    pub fn file_with_language(
        name: impl Into<String>,
        content: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        FileNode::File {
            name: name.into(),
            content: Some(content.into()),
            language: Some(language.into()),
        }
    }

    pub fn folder(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        FileNode::Folder { name: name.into(), children }
    }

    pub fn name(&self) -> &str {
        match self {
            FileNode::File { name, .. } | FileNode::Folder { name, .. } => name,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FileNode::File { .. })
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, FileNode::Folder { .. })
    }

    /// Returns the file content if this is a file node with content, None otherwise.
    pub fn content(&self) -> Option<&str> {
        match self {
            FileNode::File { content, .. } => content.as_deref(),
            FileNode::Folder { .. } => None,
        }
    }

    /// Returns the children if this is a folder node, None otherwise.
    pub fn children(&self) -> Option<&[FileNode]> {
        match self {
            FileNode::Folder { children, .. } => Some(children),
            FileNode::File { .. } => None,
        }
    }
}

/// A single committable file produced by flattening a tree: a slash-joined
/// path from the tree root plus the file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenedFile {
    pub path: String,
    pub content: String,
}

impl FlattenedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into() }
    }
}

/// Flatten a tree into committable files in depth-first order.
///
/// Paths join ancestor folder names with `/`. File nodes without content are
/// skipped entirely, so every returned entry is committable as-is. Folder
/// nodes never produce entries themselves.
pub fn flatten(nodes: &[FileNode]) -> Vec<FlattenedFile> {
    flatten_with_base(nodes, "")
}

/// Like [`flatten`], but prefixes every path with `base` (no trailing slash).
pub fn flatten_with_base(nodes: &[FileNode], base: &str) -> Vec<FlattenedFile> {
    let mut files = Vec::new();
    collect(nodes, base, &mut files);
    files
}

fn collect(nodes: &[FileNode], base: &str, out: &mut Vec<FlattenedFile>) {
    for node in nodes {
        let path = if base.is_empty() {
            node.name().to_string()
        } else {
            format!("{base}/{}", node.name())
        };
        match node {
            FileNode::File { content: Some(content), .. } => {
                out.push(FlattenedFile { path, content: content.clone() });
            }
            FileNode::File { content: None, .. } => {}
            FileNode::Folder { children, .. } => collect(children, &path, out),
        }
    }
}

/// Flatten a tree into a path-to-content map.
///
/// Sibling names are unique within a folder, so no entries collide.
pub fn flatten_to_map(nodes: &[FileNode]) -> BTreeMap<String, String> {
    flatten(nodes).into_iter().map(|file| (file.path, file.content)).collect()
}

/// Rebuild a tree from flattened files, the inverse of [`flatten`].
///
/// Folders are recreated from path segments in first-appearance order, so
/// `nest(flatten(tree))` reproduces a tree of content-bearing files with the
/// original sibling order. Language hints are not part of flattened files and
/// do not survive the round trip.
pub fn nest(files: &[FlattenedFile]) -> Vec<FileNode> {
    let mut root = Vec::new();
    for file in files {
        let segments: Vec<&str> = file.path.split('/').filter(|s| !s.is_empty()).collect();
        insert(&mut root, &segments, &file.content);
    }
    root
}

fn insert(nodes: &mut Vec<FileNode>, segments: &[&str], content: &str) {
    match segments {
        [] => {}
        [name] => nodes.push(FileNode::file(*name, content)),
        [dir, rest @ ..] => {
            let idx = match nodes
                .iter()
                .position(|node| matches!(node, FileNode::Folder { name, .. } if name == dir))
            {
                Some(idx) => idx,
                None => {
                    nodes.push(FileNode::folder(*dir, Vec::new()));
                    nodes.len() - 1
                }
            };
            if let FileNode::Folder { children, .. } = &mut nodes[idx] {
                insert(children, rest, content);
            }
        }
    }
}
