//! Address grammar definition and compilation.
//!
//! The token lists for roadway types and unit designators can be loaded from
//! configuration; the state table is closed and always comes from
//! [`addrscan_core::US_STATES`].

use addrscan_core::{BuildError, US_STATES};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Roadway types as `(abbreviation, expansion)` pairs.
pub const ROADWAY_TYPES: [(&str, &str); 11] = [
    ("St", "Street"),
    ("Ave", "Avenue"),
    ("Rd", "Road"),
    ("Blvd", "Boulevard"),
    ("Dr", "Drive"),
    ("Ln", "Lane"),
    ("Ct", "Court"),
    ("Pl", "Place"),
    ("Way", "Way"),
    ("Pkwy", "Parkway"),
    ("Cir", "Circle"),
];

/// Secondary-unit designator words. A bare `#` is always accepted as well.
pub const UNIT_DESIGNATORS: [&str; 9] = [
    "Apartment",
    "Apt",
    "Suite",
    "Ste",
    "Unit",
    "Floor",
    "Fl",
    "Room",
    "Rm",
];

/// Serializable grammar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarDef {
    /// Words that may close a street name (`St`, `Avenue`, ...).
    #[serde(default = "default_street_suffixes")]
    pub street_suffixes: Vec<String>,

    /// Words that introduce a unit number (`Apt`, `Suite`, ...).
    #[serde(default = "default_unit_designators")]
    pub unit_designators: Vec<String>,
}

impl Default for GrammarDef {
    fn default() -> Self {
        Self {
            street_suffixes: default_street_suffixes(),
            unit_designators: default_unit_designators(),
        }
    }
}

/// Expansions first, then abbreviations, without duplicates (`Way`).
#[must_use]
pub fn default_street_suffixes() -> Vec<String> {
    let mut suffixes: Vec<String> = Vec::with_capacity(ROADWAY_TYPES.len() * 2);
    for (abbreviation, expansion) in ROADWAY_TYPES {
        suffixes.push(expansion.to_string());
        if abbreviation != expansion {
            suffixes.push(abbreviation.to_string());
        }
    }
    suffixes
}

#[must_use]
pub fn default_unit_designators() -> Vec<String> {
    UNIT_DESIGNATORS.iter().map(ToString::to_string).collect()
}

impl GrammarDef {
    /// Add a roadway type on top of the current list.
    #[must_use]
    pub fn with_street_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.street_suffixes.push(suffix.into());
        self
    }

    /// Add a unit designator on top of the current list.
    #[must_use]
    pub fn with_unit_designator(mut self, designator: impl Into<String>) -> Self {
        self.unit_designators.push(designator.into());
        self
    }

    /// Render the pattern source after validating both token lists.
    pub fn pattern(&self) -> Result<String, BuildError> {
        let suffixes = alternation("street_suffixes", &self.street_suffixes)?;
        let units = alternation("unit_designators", &self.unit_designators)?;
        Ok(render_pattern(&suffixes, &units, &state_alternation()))
    }

    /// Validate and compile the grammar.
    pub fn build(&self) -> Result<Grammar, BuildError> {
        let source = self.pattern()?;
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .ignore_whitespace(true)
            .build()?;

        debug!(
            street_suffixes = self.street_suffixes.len(),
            unit_designators = self.unit_designators.len(),
            pattern_len = source.len(),
            "Compiled address grammar"
        );

        Ok(Grammar { regex })
    }
}

/// A compiled address grammar.
#[derive(Debug, Clone)]
pub struct Grammar {
    regex: Regex,
}

impl Grammar {
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    #[must_use]
    pub fn into_regex(self) -> Regex {
        self.regex
    }
}

fn alternation(list: &'static str, tokens: &[String]) -> Result<String, BuildError> {
    if tokens.is_empty() {
        return Err(BuildError::EmptyTokenList(list));
    }

    let mut parts = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.trim();
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(BuildError::InvalidToken {
                list,
                token: token.to_string(),
            });
        }
        parts.push(regex::escape(token));
    }

    Ok(parts.join("|"))
}

/// Full names first, then codes. Multi-word names accept any whitespace run.
fn state_alternation() -> String {
    let names = US_STATES
        .iter()
        .map(|state| state.name.split(' ').collect::<Vec<_>>().join(r"\s+"));
    let codes = US_STATES.iter().map(|state| state.code.to_string());
    names.chain(codes).collect::<Vec<_>>().join("|")
}

/// Assemble the verbose-mode pattern. `\x23` is a literal `#`, which would
/// otherwise open a comment.
fn render_pattern(suffixes: &str, units: &str, states: &str) -> String {
    let token = r"[a-z0-9.\-]+";

    format!(
        r"
(?P<street_address>
    \b (?P<street_number> [0-9]{{1,6}} ) \s+
    (?P<street_name>
        (?: {token} \s+ )+? (?: {suffixes} ) \b \.?           # up to a roadway type
        (?: \s+ (?: {suffixes} ) \b \.? )*                     # and any that follow it
      | {token} (?: \s+ {token} )*?                              # or as short as possible
    )
    (?: \s* ,? \s*
        (?P<unit>
            (?: (?: {units} ) \b \.? \s* \x23? | \x23 ) \s* [0-9]+ [a-z]? \b
        )
    )?
)
(?: \s* , \s* | \s+ )
(?P<city> [a-z]+ (?: \s+ [a-z]+ )*? )
\s* ,? \s*
\b (?P<state> {states} )
\s*
(?P<zip_code> [0-9]{{5}} (?: - [0-9]{{4}} )? ) \b
"
    )
}
