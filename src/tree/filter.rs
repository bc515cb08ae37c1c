//! Name-based exclusion for tree walking

use regex::Regex;

use super::error::PatternError;

/// Exclusion patterns applied to directory entry names.
///
/// Every pattern is anchored at both ends, so `git` excludes an entry named
/// `git` but not `.gitignore`. An empty filter excludes nothing.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<Regex>,
}

impl ExcludeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile each whitespace-separated token of every input string.
    ///
    /// `["node_modules .git", "target"]` yields three patterns.
    pub fn from_tokens<I, S>(inputs: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::new();
        for input in inputs {
            for token in input.as_ref().split_whitespace() {
                filter.add(token)?;
            }
        }
        Ok(filter)
    }

    /// Compile one token into an anchored pattern.
    pub fn add(&mut self, token: &str) -> Result<(), PatternError> {
        let regex = Regex::new(&format!("^(?:{token})$")).map_err(|source| PatternError {
            pattern: token.to_string(),
            source,
        })?;
        self.patterns.push(regex);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True iff at least one pattern matches the whole of `name`.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }
}
