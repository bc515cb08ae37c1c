//! Output configuration types

use super::template::Template;

/// How each target's tree is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub format: OutputFormat,
    /// Line template for text output
    pub template: Template,
}

