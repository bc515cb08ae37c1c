//! Post-order size aggregation

use super::node::{NodeId, NodeKind, Tree};

/// Assign every node its total size.
///
/// Leaves take their own lstat size (0 when unreadable). A directory takes
/// its own entry size plus the already computed sizes of its children.
/// Does no I/O.
pub fn aggregate(tree: &mut Tree) {
    let mut stack = vec![(tree.root(), false)];
    while let Some((id, children_done)) = stack.pop() {
        if children_done || tree.node(id).children.is_empty() {
            let size = own_total(tree, id);
            tree.node_mut(id).size = Some(size);
            continue;
        }
        stack.push((id, true));
        for child in tree.node(id).children.iter().rev() {
            stack.push((*child, false));
        }
    }
}

fn own_total(tree: &Tree, id: NodeId) -> u64 {
    let node = tree.node(id);
    let raw = node.size_raw.unwrap_or(0);
    match node.kind {
        NodeKind::Directory => tree
            .children(id)
            .map(|c| c.size.unwrap_or(0))
            .fold(raw, u64::saturating_add),
        NodeKind::File | NodeKind::Symlink | NodeKind::Unreadable => raw,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::tree::node::Node;
    use crate::tree::TreeBuilder;
    use crate::test_utils::TestDir;

    fn node(path: &str, depth: usize, kind: NodeKind, raw: Option<u64>) -> Node {
        Node::new(PathBuf::from(path), depth, kind, raw)
    }

    #[test]
    fn test_flat_directory() {
        let mut tree = Tree::with_root(node("/a", 0, NodeKind::Directory, Some(64)));
        let root = tree.root();
        let x = tree.push_child(root, node("/a/x", 1, NodeKind::File, Some(100)));
        let y = tree.push_child(root, node("/a/y", 1, NodeKind::File, Some(50)));
        tree.mark_last_child(root);

        aggregate(&mut tree);
        assert_eq!(tree.node(x).size, Some(100));
        assert_eq!(tree.node(y).size, Some(50));
        assert_eq!(tree.total_size(), Some(214));
    }

    #[test]
    fn test_unreadable_contributes_zero() {
        let mut tree = Tree::with_root(node("/a", 0, NodeKind::Directory, Some(64)));
        let root = tree.root();
        let bad = tree.push_child(root, node("/a/bad", 1, NodeKind::Unreadable, None));
        tree.push_child(root, node("/a/ok", 1, NodeKind::File, Some(10)));

        aggregate(&mut tree);
        assert_eq!(tree.node(bad).size, Some(0));
        assert_eq!(tree.total_size(), Some(74));
    }

    #[test]
    fn test_nested_directories_sum_bottom_up() {
        let mut tree = Tree::with_root(node("/r", 0, NodeKind::Directory, Some(10)));
        let root = tree.root();
        let a = tree.push_child(root, node("/r/a", 1, NodeKind::Directory, Some(20)));
        let b = tree.push_child(a, node("/r/a/b", 2, NodeKind::Directory, Some(30)));
        tree.push_child(b, node("/r/a/b/f", 3, NodeKind::File, Some(5)));
        tree.push_child(a, node("/r/a/l", 2, NodeKind::Symlink, Some(7)));

        aggregate(&mut tree);
        assert_eq!(tree.node(b).size, Some(35));
        assert_eq!(tree.node(a).size, Some(62));
        assert_eq!(tree.total_size(), Some(72));
    }

    #[test]
    fn test_empty_directory_keeps_own_size() {
        let mut tree = Tree::with_root(node("/e", 0, NodeKind::Directory, Some(4096)));
        aggregate(&mut tree);
        assert_eq!(tree.total_size(), Some(4096));
    }

    #[test]
    fn test_directory_size_invariant_on_disk() {
        let dir = TestDir::new();
        dir.add_sized_file("x", 100);
        dir.add_sized_file("y", 50);
        dir.add_sized_file("sub/z", 7);

        let mut tree = TreeBuilder::default().build(dir.path());
        aggregate(&mut tree);

        for (id, n) in tree.nodes() {
            let size = n.size.expect("aggregated");
            match n.kind {
                NodeKind::Directory => {
                    let children: u64 = tree.children(id).map(|c| c.size.unwrap()).sum();
                    assert_eq!(size, n.size_raw.unwrap() + children);
                    assert!(size >= n.size_raw.unwrap());
                }
                _ => assert_eq!(size, n.size_raw.unwrap_or(0)),
            }
        }
    }
}
