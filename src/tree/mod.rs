//! Directory tree construction and size aggregation
//!
//! A walk happens in two passes over an arena-backed [`Tree`]:
//!
//! - [`TreeBuilder`] lstat-s the target and its descendants, sorting each
//!   directory listing by [`NameOrder`] and filtering it
//! - [`aggregate()`] assigns every node its total size, children first
//!
//! Rendering lives in [`crate::output`].

mod aggregate;
mod builder;
mod error;
mod filter;
mod node;
mod order;

pub use aggregate::aggregate;
pub use builder::TreeBuilder;
pub use error::{PatternError, WalkError};
pub use filter::ExcludeFilter;
pub use node::{Node, NodeId, NodeKind, Tree, display_name};
pub use order::NameOrder;

/// Build and aggregate the tree for one target path.
pub fn scan(builder: &TreeBuilder, root: &std::path::Path) -> Tree {
    let mut tree = builder.build(root);
    aggregate(&mut tree);
    tree
}
