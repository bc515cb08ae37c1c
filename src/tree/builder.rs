//! TreeBuilder - walks a path with lstat and builds the in-memory tree

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::error::WalkError;
use super::filter::ExcludeFilter;
use super::node::{Node, NodeId, NodeKind, Tree};
use super::order::NameOrder;

/// Builds a [`Tree`] for one target path.
///
/// Every entry is inspected with `symlink_metadata`, so symbolic links are
/// leaves and link cycles cannot cause unbounded recursion. Stat failures
/// turn into [`NodeKind::Unreadable`] leaves and are recorded on the tree;
/// the walk always runs to completion.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    filter: ExcludeFilter,
    order: NameOrder,
}

impl TreeBuilder {
    pub fn new(filter: ExcludeFilter) -> Self {
        Self {
            filter,
            order: NameOrder::new(),
        }
    }

    /// Build the tree rooted at `root`. The exclusion filter is never
    /// applied to `root` itself.
    pub fn build(&self, root: &Path) -> Tree {
        let meta = match fs::symlink_metadata(root) {
            Ok(meta) => meta,
            Err(source) => {
                warn!(path = %root.display(), error = %source, "cannot stat root");
                let node = Node::new(root.to_path_buf(), 0, NodeKind::Unreadable, None);
                let mut tree = Tree::with_root(node);
                tree.record(WalkError::Stat {
                    path: root.to_path_buf(),
                    source,
                });
                return tree;
            }
        };

        // A root that is a socket or device is still shown, as a plain leaf.
        let kind = NodeKind::from_metadata(&meta).unwrap_or(NodeKind::File);
        let mut tree = Tree::with_root(Node::new(root.to_path_buf(), 0, kind, Some(meta.len())));
        if kind.is_dir() {
            let root_id = tree.root();
            self.build_children(&mut tree, root_id);
        }
        tree
    }

    fn build_children(&self, tree: &mut Tree, dir: NodeId) {
        let dir_path = tree.node(dir).path.clone();
        let depth = tree.node(dir).depth + 1;

        let entries = match self.read_sorted_entries(tree, &dir_path) {
            Some(entries) => entries,
            None => return,
        };
        debug!(path = %dir_path.display(), entries = entries.len(), "listed directory");

        for (name, os_name) in entries {
            if self.filter.is_excluded(&name) {
                debug!(name = %name, "excluded");
                continue;
            }

            let entry_path = dir_path.join(&os_name);
            match fs::symlink_metadata(&entry_path) {
                Ok(meta) => match NodeKind::from_metadata(&meta) {
                    Some(kind) => {
                        let node = Node::new(entry_path, depth, kind, Some(meta.len()));
                        let id = tree.push_child(dir, node);
                        if kind.is_dir() {
                            self.build_children(tree, id);
                        }
                    }
                    None => {
                        debug!(path = %entry_path.display(), "skipping special file");
                    }
                },
                Err(source) => {
                    warn!(path = %entry_path.display(), error = %source, "cannot stat entry");
                    let node = Node::new(entry_path.clone(), depth, NodeKind::Unreadable, None);
                    tree.push_child(dir, node);
                    tree.record(WalkError::Stat {
                        path: entry_path,
                        source,
                    });
                }
            }
        }

        tree.mark_last_child(dir);
    }

    /// List a directory and sort its entry names. The directory handle is
    /// closed before this returns.
    fn read_sorted_entries(&self, tree: &mut Tree, path: &Path) -> Option<Vec<(String, OsString)>> {
        let read_dir = match fs::read_dir(path) {
            Ok(rd) => rd,
            Err(source) => {
                warn!(path = %path.display(), error = %source, "cannot list directory");
                tree.record(WalkError::ReadDir {
                    path: path.to_path_buf(),
                    source,
                });
                return None;
            }
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => {
                    let os_name = entry.file_name();
                    entries.push((os_name.to_string_lossy().to_string(), os_name));
                }
                Err(source) => {
                    warn!(path = %path.display(), error = %source, "cannot read directory entry");
                    tree.record(WalkError::ReadDir {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            }
        }
        entries.sort_by(|a, b| self.order.compare(&a.0, &b.0));
        Some(entries)
    }
}
