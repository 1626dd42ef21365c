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

//! Domain types shared by the address matcher and its callers.

pub mod error;
pub mod record;
pub mod states;

pub use error::{BuildError, ColumnError};
pub use record::{AddressColumns, AddressRecord};
pub use states::{US_STATES, UsState};
