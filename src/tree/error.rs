//! Errors raised while building a tree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A filesystem problem met during a walk. These never abort the walk;
/// they are collected on the [`Tree`](super::Tree) and reported afterwards.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot access '{}': {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    pub fn path(&self) -> &PathBuf {
        match self {
            WalkError::Stat { path, .. } | WalkError::ReadDir { path, .. } => path,
        }
    }
}

/// An exclusion token that is not a valid pattern.
#[derive(Debug, Error)]
#[error("invalid exclude pattern '{pattern}': {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}
