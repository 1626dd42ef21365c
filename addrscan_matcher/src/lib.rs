#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Pattern-based extraction of US postal addresses from free text.
//!
//! [`AddressMatcher`] finds every street, city, state and ZIP sequence in a
//! block of text; [`ColumnApplier`] runs it over one column of a table.

pub mod column;
pub mod grammar;
pub mod matcher;

pub use addrscan_core::{AddressColumns, AddressRecord, BuildError, ColumnError, US_STATES, UsState};
pub use column::{ColumnApplier, Row};
pub use grammar::{GrammarDef, ROADWAY_TYPES, UNIT_DESIGNATORS};
pub use matcher::{AddressMatcher, default_matcher};
