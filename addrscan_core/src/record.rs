//! Extracted address values.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::states::UsState;

/// One address found in free text.
///
/// A record only exists when street, city, state and ZIP were all present, in
/// that order. Every field holds the literal (trimmed) text that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Number, name, roadway type and unit, e.g. `1234 Elm St Apt 56`.
    pub street_address: String,
    /// Leading digit run of the street segment.
    pub street_number: String,
    /// Street name with its roadway type, without the unit, e.g. `Elm St`.
    pub street_name: String,
    /// Secondary unit such as `Apt 56` or `#4`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub city: String,
    /// State code or full name, exactly as written.
    pub state: String,
    /// `NNNNN` or `NNNNN-NNNN`.
    pub zip_code: String,
    /// Byte offset where the match starts in the source text.
    #[serde(skip)]
    pub start: usize,
    /// Byte offset one past the end of the match.
    #[serde(skip)]
    pub end: usize,
}

impl AddressRecord {
    /// Byte range of the match in the source text.
    #[must_use]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The five-digit base ZIP code.
    #[must_use]
    pub fn zip_base(&self) -> &str {
        self.zip_code
            .split_once('-')
            .map_or(self.zip_code.as_str(), |(base, _)| base)
    }

    /// The ZIP+4 suffix, when present.
    #[must_use]
    pub fn zip_plus4(&self) -> Option<&str> {
        self.zip_code.split_once('-').map(|(_, suffix)| suffix)
    }

    /// The state this record names, whichever spelling was used.
    #[must_use]
    pub fn state_identity(&self) -> Option<&'static UsState> {
        UsState::lookup(&self.state)
    }
}

/// Fixed-shape columns produced for one tabular cell.
///
/// Every key is always present; `None` marks a cell with no address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressColumns {
    pub street_address: Option<String>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl AddressColumns {
    /// Column names in output order.
    pub const KEYS: [&'static str; 6] = [
        "street_address",
        "street_number",
        "street_name",
        "city",
        "state",
        "zip_code",
    ];

    /// Columns for a cell without a match.
    #[must_use]
    pub fn absent() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.street_address.is_none()
            && self.street_number.is_none()
            && self.street_name.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip_code.is_none()
    }

    /// `(key, value)` pairs in [`Self::KEYS`] order.
    #[must_use]
    pub fn into_pairs(self) -> [(&'static str, Option<String>); 6] {
        let [street_address, street_number, street_name, city, state, zip_code] = Self::KEYS;
        [
            (street_address, self.street_address),
            (street_number, self.street_number),
            (street_name, self.street_name),
            (city, self.city),
            (state, self.state),
            (zip_code, self.zip_code),
        ]
    }
}

impl From<AddressRecord> for AddressColumns {
    fn from(record: AddressRecord) -> Self {
        Self {
            street_address: Some(record.street_address),
            street_number: Some(record.street_number),
            street_name: Some(record.street_name),
            city: Some(record.city),
            state: Some(record.state),
            zip_code: Some(record.zip_code),
        }
    }
}

impl From<Option<AddressRecord>> for AddressColumns {
    fn from(record: Option<AddressRecord>) -> Self {
        record.map_or_else(Self::absent, Self::from)
    }
}
