//! Address extraction over free text.
//!
//! The matcher applies the compiled grammar left to right and turns every
//! non-overlapping match into an [`AddressRecord`]. Text without a complete
//! street, city, state and ZIP sequence simply produces nothing.

use addrscan_core::{AddressRecord, BuildError};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use crate::grammar::GrammarDef;

static DEFAULT_MATCHER: Lazy<Result<AddressMatcher, BuildError>> =
    Lazy::new(AddressMatcher::with_defaults);

/// Shared matcher built from the default grammar.
pub fn default_matcher() -> Result<&'static AddressMatcher, &'static BuildError> {
    DEFAULT_MATCHER.as_ref()
}

/// Extracts US postal addresses from unstructured text.
///
/// Construction compiles the grammar once; afterwards the matcher is
/// read-only and can be shared across threads.
#[derive(Debug, Clone)]
pub struct AddressMatcher {
    regex: Regex,
}

impl AddressMatcher {
    /// Compile a matcher from a grammar definition.
    pub fn new(def: &GrammarDef) -> Result<Self, BuildError> {
        Ok(Self {
            regex: def.build()?.into_regex(),
        })
    }

    /// Compile a matcher with the default roadway types and unit designators.
    pub fn with_defaults() -> Result<Self, BuildError> {
        Self::new(&GrammarDef::default())
    }

    /// All addresses in `text`, in order of appearance.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<AddressRecord> {
        let records: Vec<_> = self.find_iter(text).collect();
        trace!(count = records.len(), text_len = text.len(), "Extracted addresses");
        records
    }

    /// Lazily iterate over the addresses in `text`.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = AddressRecord> + 'a {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| record_from_captures(&caps))
    }

    /// The first address in `text`, if any.
    #[must_use]
    pub fn extract_first(&self, text: &str) -> Option<AddressRecord> {
        self.regex
            .captures(text)
            .and_then(|caps| record_from_captures(&caps))
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Source of the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

fn record_from_captures(caps: &Captures<'_>) -> Option<AddressRecord> {
    let whole = caps.get(0)?;
    let field = |name: &str| caps.name(name).map(|m| m.as_str().trim().to_string());

    Some(AddressRecord {
        street_address: field("street_address")?,
        street_number: field("street_number")?,
        street_name: field("street_name")?,
        unit: field("unit"),
        city: field("city")?,
        state: field("state")?,
        zip_code: field("zip_code")?,
        start: whole.start(),
        end: whole.end(),
    })
}
