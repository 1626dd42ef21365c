//! The closed table of US states accepted by the address grammar.
//!
//! Each entry pairs the two-letter postal code with the unabbreviated name.
//! Both spellings identify the same state, but extraction keeps whichever
//! literal text appeared in the source; lookups here are for validation and
//! identity resolution only.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A US state: postal code plus full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UsState {
    /// Two-letter postal code, upper case.
    pub code: &'static str,
    /// Unabbreviated name.
    pub name: &'static str,
}

impl UsState {
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    /// Resolve a state from either its code or its full name.
    ///
    /// Matching ignores case and treats any run of whitespace inside a
    /// multi-word name as a single space, so `"new   york"` resolves to New York.
    #[must_use]
    pub fn lookup(text: &str) -> Option<&'static Self> {
        STATE_INDEX.get(&normalize_key(text)).copied()
    }

    /// Resolve a state by its postal code only.
    #[must_use]
    pub fn by_code(code: &str) -> Option<&'static Self> {
        US_STATES
            .iter()
            .find(|state| state.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Whether `text` names this state by code or full name.
    #[must_use]
    pub fn is_named_by(&self, text: &str) -> bool {
        Self::lookup(text).is_some_and(|state| state == self)
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// All 50 states. No territories, no districts.
pub static US_STATES: [UsState; 50] = [
    UsState::new("AL", "Alabama"),
    UsState::new("AK", "Alaska"),
    UsState::new("AZ", "Arizona"),
    UsState::new("AR", "Arkansas"),
    UsState::new("CA", "California"),
    UsState::new("CO", "Colorado"),
    UsState::new("CT", "Connecticut"),
    UsState::new("DE", "Delaware"),
    UsState::new("FL", "Florida"),
    UsState::new("GA", "Georgia"),
    UsState::new("HI", "Hawaii"),
    UsState::new("ID", "Idaho"),
    UsState::new("IL", "Illinois"),
    UsState::new("IN", "Indiana"),
    UsState::new("IA", "Iowa"),
    UsState::new("KS", "Kansas"),
    UsState::new("KY", "Kentucky"),
    UsState::new("LA", "Louisiana"),
    UsState::new("ME", "Maine"),
    UsState::new("MD", "Maryland"),
    UsState::new("MA", "Massachusetts"),
    UsState::new("MI", "Michigan"),
    UsState::new("MN", "Minnesota"),
    UsState::new("MS", "Mississippi"),
    UsState::new("MO", "Missouri"),
    UsState::new("MT", "Montana"),
    UsState::new("NE", "Nebraska"),
    UsState::new("NV", "Nevada"),
    UsState::new("NH", "New Hampshire"),
    UsState::new("NJ", "New Jersey"),
    UsState::new("NM", "New Mexico"),
    UsState::new("NY", "New York"),
    UsState::new("NC", "North Carolina"),
    UsState::new("ND", "North Dakota"),
    UsState::new("OH", "Ohio"),
    UsState::new("OK", "Oklahoma"),
    UsState::new("OR", "Oregon"),
    UsState::new("PA", "Pennsylvania"),
    UsState::new("RI", "Rhode Island"),
    UsState::new("SC", "South Carolina"),
    UsState::new("SD", "South Dakota"),
    UsState::new("TN", "Tennessee"),
    UsState::new("TX", "Texas"),
    UsState::new("UT", "Utah"),
    UsState::new("VT", "Vermont"),
    UsState::new("VA", "Virginia"),
    UsState::new("WA", "Washington"),
    UsState::new("WV", "West Virginia"),
    UsState::new("WI", "Wisconsin"),
    UsState::new("WY", "Wyoming"),
];

static STATE_INDEX: Lazy<HashMap<String, &'static UsState>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(US_STATES.len() * 2);
    for state in &US_STATES {
        index.insert(normalize_key(state.code), state);
        index.insert(normalize_key(state.name), state);
    }
    index
});

fn normalize_key(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
