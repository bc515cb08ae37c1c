//! Tree formatter for the text report
//!
//! This module provides `TreeFormatter` which renders an aggregated `Tree`
//! into one line per node, in pre-order, using a line template.

use std::path::Path;

use crate::size::format_size;
use crate::tree::{NodeId, Tree};

use super::report::Report;
use super::template::{FieldValues, Template};
use super::utils::{display_entry_name, draw_prefix, type_char};

/// Formatter for the text tree.
#[derive(Debug, Clone, Default)]
pub struct TreeFormatter {
    template: Template,
}

impl TreeFormatter {
    pub fn new(template: Template) -> Self {
        Self { template }
    }

    /// Render every node as `<prefix><line>\n`, parents before children.
    pub fn format(&self, tree: &Tree) -> String {
        let mut output = String::new();
        let mut stack = vec![tree.root()];
        while let Some(id) = stack.pop() {
            output.push_str(&draw_prefix(tree, id));
            output.push_str(&self.format_line(tree, id));
            output.push('\n');
            stack.extend(tree.node(id).children.iter().rev().copied());
        }
        output
    }

    /// Substitute one node's fields into the template.
    pub fn format_line(&self, tree: &Tree, id: NodeId) -> String {
        let node = tree.node(id);
        let values = FieldValues {
            kind: type_char(node.kind),
            name: display_entry_name(node),
            size: format_size(node.size.unwrap_or(0)),
        };
        self.template.render(&values)
    }

    /// Render a tree together with the target it was built for.
    pub fn report(&self, target: &Path, tree: &Tree) -> Report {
        Report::new(target.to_path_buf(), self.format(tree))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::{ExcludeFilter, Node, NodeKind, TreeBuilder, aggregate, scan};

    fn node(path: &str, depth: usize, kind: NodeKind, raw: Option<u64>) -> Node {
        Node::new(PathBuf::from(path), depth, kind, raw)
    }

    /// `/a` with files `x` (100 bytes) and `y` (50 bytes), own size 64.
    fn flat_tree() -> Tree {
        let mut tree = Tree::with_root(node("/a", 0, NodeKind::Directory, Some(64)));
        let root = tree.root();
        tree.push_child(root, node("/a/x", 1, NodeKind::File, Some(100)));
        tree.push_child(root, node("/a/y", 1, NodeKind::File, Some(50)));
        tree.mark_last_child(root);
        aggregate(&mut tree);
        tree
    }

    #[test]
    fn test_flat_directory() {
        let output = TreeFormatter::default().format(&flat_tree());
        assert_eq!(
            output,
            "(d) a/\t(214.00 B)\n|- (-) x\t(100.00 B)\n`- (-) y\t(50.00 B)\n"
        );
    }

    #[test]
    fn test_nested_prefixes() {
        // r/
        // |- a/
        // |  |- b
        // |  `- c/
        // |     `- d
        // `- e/
        //    `- f
        let mut tree = Tree::with_root(node("/r", 0, NodeKind::Directory, Some(0)));
        let r = tree.root();
        let a = tree.push_child(r, node("/r/a", 1, NodeKind::Directory, Some(0)));
        tree.push_child(a, node("/r/a/b", 2, NodeKind::File, Some(1)));
        let c = tree.push_child(a, node("/r/a/c", 2, NodeKind::Directory, Some(0)));
        tree.push_child(c, node("/r/a/c/d", 3, NodeKind::File, Some(1)));
        let e = tree.push_child(r, node("/r/e", 1, NodeKind::Directory, Some(0)));
        tree.push_child(e, node("/r/e/f", 2, NodeKind::Symlink, Some(1)));
        for id in [r, a, c, e] {
            tree.mark_last_child(id);
        }
        aggregate(&mut tree);

        let formatter = TreeFormatter::new(Template::parse("name"));
        assert_eq!(
            formatter.format(&tree),
            "r/\n|- a/\n|  |- b\n|  `- c/\n|     `- d\n`- e/\n   `- f\n"
        );
    }

    #[test]
    fn test_unreadable_child_renders_as_d() {
        let mut tree = Tree::with_root(node("/a", 0, NodeKind::Directory, Some(64)));
        let root = tree.root();
        tree.push_child(root, node("/a/gone", 1, NodeKind::Unreadable, None));
        tree.push_child(root, node("/a/ok", 1, NodeKind::File, Some(6)));
        tree.mark_last_child(root);
        aggregate(&mut tree);

        let output = TreeFormatter::default().format(&tree);
        assert!(output.contains("|- (d) gone\t(0.00 B)\n"));
        assert!(output.contains("`- (-) ok\t(6.00 B)\n"));
        assert!(output.starts_with("(d) a/\t(70.00 B)\n"));
    }

    #[test]
    fn test_single_unreadable_root() {
        let tree = scan(&TreeBuilder::default(), Path::new("/definitely/not/here"));
        let output = TreeFormatter::default().format(&tree);
        assert_eq!(output, "(d) here\t(0.00 B)\n");
    }

    #[test]
    fn test_filesystem_root_drawn_once() {
        let mut tree = Tree::with_root(node("/", 0, NodeKind::Directory, Some(4096)));
        let root = tree.root();
        tree.push_child(root, node("/etc", 1, NodeKind::Directory, Some(0)));
        tree.mark_last_child(root);
        aggregate(&mut tree);

        let output = TreeFormatter::new(Template::parse("name")).format(&tree);
        assert_eq!(output, "/\n`- etc/\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let tree = flat_tree();
        let formatter = TreeFormatter::new(Template::parse("type name size"));
        assert_eq!(formatter.format(&tree), formatter.format(&tree));
    }

    #[test]
    fn test_exclusion_on_disk() {
        let dir = TestDir::new();
        dir.add_sized_file("x", 100);
        dir.add_sized_file("y", 50);
        let filter = ExcludeFilter::from_tokens(["x"]).unwrap();
        let tree = scan(&TreeBuilder::new(filter), dir.path());

        let output = TreeFormatter::new(Template::parse("name size")).format(&tree);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "`- y 50.00 B");
    }

    #[test]
    fn test_report_keeps_target() {
        let tree = flat_tree();
        let report = TreeFormatter::default().report(Path::new("/a"), &tree);
        assert_eq!(report.target(), Path::new("/a"));
        assert!(report.body().ends_with("(50.00 B)\n"));
    }
}
