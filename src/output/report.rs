//! Per-target text report

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::{Color, ColorSpec, WriteColor};

/// Rendered tree for one target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    target: PathBuf,
    body: String,
}

impl Report {
    pub fn new(target: PathBuf, body: String) -> Self {
        Self { target, body }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn header(&self) -> String {
        format!("Display of File System Tree at {}:", self.target.display())
    }

    /// Plain-text block: a blank line, the header, the tree, a blank line.
    pub fn to_text(&self) -> String {
        format!("\n{}\n{}\n", self.header(), self.body)
    }

    /// Write the block, with the header highlighted when the sink supports color.
    pub fn write<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", self.header())?;
        out.reset()?;
        writeln!(out)?;
        write!(out, "{}", self.body)?;
        writeln!(out)?;
        out.flush()
    }
}
