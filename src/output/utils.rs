//! Shared helpers for drawing tree lines

use crate::tree::{Node, NodeId, NodeKind, Tree};

/// Segment for an ancestor level that has further siblings below it.
pub const PIPE: &str = "|  ";
/// Segment for an ancestor level that was the last child.
pub const BLANK: &str = "   ";
/// Connector for a node that has later siblings.
pub const TEE: &str = "|- ";
/// Connector for the last child of its parent.
pub const ELBOW: &str = "`- ";

/// Branch characters drawn before a node's line.
///
/// The root gets an empty prefix. Any other node gets one segment per
/// ancestor between the root and itself, then its own connector.
pub fn draw_prefix(tree: &Tree, id: NodeId) -> String {
    let node = tree.node(id);
    if node.depth == 0 {
        return String::new();
    }

    let mut prefix = String::new();
    for ancestor in tree.ancestors_outermost_first(id) {
        prefix.push_str(if tree.node(ancestor).is_last_child {
            BLANK
        } else {
            PIPE
        });
    }
    prefix.push_str(connector(node.is_last_child));
    prefix
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { ELBOW } else { TEE }
}

/// Character shown for the `type` placeholder. Unreadable entries carry no
/// type information and are drawn like directories.
pub fn type_char(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::File => "-",
        NodeKind::Symlink => "l",
        NodeKind::Directory | NodeKind::Unreadable => "d",
    }
}

/// Name shown for the `name` placeholder; directories get a trailing `/`.
pub fn display_entry_name(node: &Node) -> String {
    if node.is_dir() {
        format!("{}/", node.name)
    } else {
        node.name.clone()
    }
}
