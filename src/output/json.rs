//! JSON output formatting

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::tree::{NodeId, NodeKind, Tree};

/// Entry type as written in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Directory,
    File,
    Symlink,
    Unreadable,
}

impl From<NodeKind> for JsonKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Directory => JsonKind::Directory,
            NodeKind::File => JsonKind::File,
            NodeKind::Symlink => JsonKind::Symlink,
            NodeKind::Unreadable => JsonKind::Unreadable,
        }
    }
}

/// Nested, serializable copy of one node and its subtree.
#[derive(Debug, Clone, Serialize)]
pub struct JsonNode {
    pub name: String,
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: JsonKind,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<JsonNode>>,
}

impl JsonNode {
    pub fn from_tree(tree: &Tree, id: NodeId) -> Self {
        let node = tree.node(id);
        let children = node.is_dir().then(|| {
            node.children
                .iter()
                .map(|c| JsonNode::from_tree(tree, *c))
                .collect()
        });
        Self {
            name: node.name.clone(),
            path: node.path.clone(),
            kind: node.kind.into(),
            size: node.size.unwrap_or(0),
            children,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub target: PathBuf,
    pub tree: JsonNode,
}

impl JsonReport {
    pub fn new(target: &Path, tree: &Tree) -> Self {
        Self {
            target: target.to_path_buf(),
            tree: JsonNode::from_tree(tree, tree.root()),
        }
    }
}

/// Write every target's report as one pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, reports: &[JsonReport]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(reports).map_err(io::Error::other)?;
    writeln!(out, "{}", json)?;
    out.flush()
}
