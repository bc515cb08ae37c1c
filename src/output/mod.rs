//! Tree formatting and display
//!
//! This module provides formatters for writing an aggregated tree:
//! - Text output, one templated line per node with branch prefixes
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `template` - Line templates and placeholder substitution
//! - `utils` - Draw-prefix and per-field helpers
//! - `tree` - Text tree formatter
//! - `report` - Per-target text block with header
//! - `json` - JSON output

mod config;
mod json;
mod report;
mod template;
mod tree;
mod utils;

pub use config::{OutputConfig, OutputFormat};
pub use json::{JsonKind, JsonNode, JsonReport, write_json};
pub use report::Report;
pub use template::{DEFAULT_FORMAT, Field, FieldValues, Template};
pub use tree::TreeFormatter;
pub use utils::{connector, display_entry_name, draw_prefix, type_char};
