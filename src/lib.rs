//! fstree - a directory tree with a computed size on every line

pub mod output;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{
    JsonReport, OutputConfig, OutputFormat, Report, Template, TreeFormatter, write_json,
};
pub use size::format_size;
pub use tree::{ExcludeFilter, Node, NodeId, NodeKind, Tree, TreeBuilder, aggregate, scan};
