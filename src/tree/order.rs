//! Locale-aware ordering of directory entry names

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

/// Sort order for sibling entries.
///
/// Names are compared with the Unicode root collation (accents and case are
/// secondary to the base letter, punctuation follows CLDR order), then by
/// their raw text so that names the collator considers equal still sort the
/// same way on every run.
pub struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!(error = %e, "collation data unavailable, sorting names case-insensitively");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        collated.then_with(|| a.cmp(b))
    }
}

impl Default for NameOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NameOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameOrder")
            .field("collated", &self.collator.is_some())
            .finish()
    }
}
