//! Arena-backed tree of filesystem entries

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use super::error::WalkError;

/// Index of a node inside its owning [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId(pub usize);

/// What an lstat call reported for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
    Symlink,
    /// The entry could not be stat-ed; no type information is available.
    Unreadable,
}

impl NodeKind {
    /// Classify lstat metadata. Returns `None` for sockets, FIFOs and device nodes.
    pub fn from_metadata(meta: &Metadata) -> Option<Self> {
        let ft = meta.file_type();
        if ft.is_symlink() {
            Some(NodeKind::Symlink)
        } else if ft.is_dir() {
            Some(NodeKind::Directory)
        } else if ft.is_file() {
            Some(NodeKind::File)
        } else {
            None
        }
    }

    pub fn is_dir(self) -> bool {
        matches!(self, NodeKind::Directory)
    }
}

/// One entry encountered during a walk.
#[derive(Debug, Clone)]
pub struct Node {
    pub path: PathBuf,
    pub name: String,
    pub depth: usize,
    pub kind: NodeKind,
    /// Own size from lstat; `None` when unreadable.
    pub size_raw: Option<u64>,
    /// Aggregated size; `None` until [`crate::tree::aggregate()`] has run.
    pub size: Option<u64>,
    pub is_last_child: bool,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn new(path: PathBuf, depth: usize, kind: NodeKind, size_raw: Option<u64>) -> Self {
        let name = display_name(&path);
        Self {
            path,
            name,
            depth,
            kind,
            size_raw,
            size: None,
            is_last_child: false,
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// Base name of a path. Empty when it has none, as for `/`; the directory
/// suffix added at render time then prints the root as `/`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// All nodes of one walk. The arena owns every node; children and parents
/// refer to each other by [`NodeId`].
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    diagnostics: Vec<WalkError>,
}

impl Tree {
    pub(crate) fn with_root(root: Node) -> Self {
        Self {
            nodes: vec![root],
            root: NodeId(0),
            diagnostics: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Number of nodes, the root included. Never zero.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.node(id).children.iter().map(|c| self.node(*c))
    }

    /// Problems met while building; none of them stopped the walk.
    pub fn diagnostics(&self) -> &[WalkError] {
        &self.diagnostics
    }

    /// Aggregated size of the root, if aggregation has run.
    pub fn total_size(&self) -> Option<u64> {
        self.node(self.root).size
    }

    /// Append `node` as the next child of `parent` and return its id.
    pub(crate) fn push_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Set the last-child flag on the final child of `parent`, if any.
    pub(crate) fn mark_last_child(&mut self, parent: NodeId) {
        let count = self.nodes[parent.0].children.len();
        for i in 0..count {
            let child = self.nodes[parent.0].children[i];
            self.nodes[child.0].is_last_child = i + 1 == count;
        }
    }

    pub(crate) fn record(&mut self, err: WalkError) {
        self.diagnostics.push(err);
    }

    /// Ancestors of `id` from depth 1 down to its parent. The root is excluded.
    pub fn ancestors_outermost_first(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cur = self.node(id).parent;
        while let Some(p) = cur {
            if p == self.root {
                break;
            }
            chain.push(p);
            cur = self.node(p).parent;
        }
        chain.reverse();
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(path: &str, depth: usize) -> Node {
        Node::new(PathBuf::from(path), depth, NodeKind::Directory, Some(64))
    }

    #[test]
    fn test_display_name_uses_base_name() {
        assert_eq!(display_name(Path::new("/a/b/c.txt")), "c.txt");
        assert_eq!(display_name(Path::new("/")), "");
    }

    #[test]
    fn test_push_child_links_parent() {
        let mut tree = Tree::with_root(dir("/a", 0));
        let b = tree.push_child(tree.root(), dir("/a/b", 1));
        assert_eq!(tree.node(b).parent, Some(tree.root()));
        assert_eq!(tree.node(tree.root()).children, vec![b]);
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_mark_last_child_only_flags_final() {
        let mut tree = Tree::with_root(dir("/a", 0));
        let root = tree.root();
        let x = tree.push_child(root, dir("/a/x", 1));
        let y = tree.push_child(root, dir("/a/y", 1));
        tree.mark_last_child(root);
        assert!(!tree.node(x).is_last_child);
        assert!(tree.node(y).is_last_child);
        assert!(!tree.node(root).is_last_child);
    }

    #[test]
    fn test_ancestors_exclude_root() {
        let mut tree = Tree::with_root(dir("/a", 0));
        let b = tree.push_child(tree.root(), dir("/a/b", 1));
        let c = tree.push_child(b, dir("/a/b/c", 2));
        let d = tree.push_child(c, dir("/a/b/c/d", 3));
        assert_eq!(tree.ancestors_outermost_first(d), vec![b, c]);
        assert!(tree.ancestors_outermost_first(b).is_empty());
    }
}
