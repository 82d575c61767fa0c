//! # jiff-assertions
//!
//! > Fluent assertions for jiff date and time values
//!
//! **jiff-assertions** compares temporal values in tests and explains, in
//! plain words, what did not hold.
//!
//! ## Quick Start
//!
//! ```rust
//! use jiff::{SignedDuration, Timestamp};
//! use jiff_assertions::prelude::*;
//!
//! let created: Timestamp = "2024-03-01T09:00:00Z".parse().unwrap();
//! let updated: Timestamp = "2024-03-01T09:00:02Z".parse().unwrap();
//!
//! assert_instant(updated)
//!     .be_after(created, "updates follow creation")
//!     .and()
//!     .be_close_to(created, SignedDuration::from_secs(5), "");
//! ```
//!
//! Had `updated` been `08:59:00`, the first assertion would have panicked
//! with:
//!
//! ```text
//! Expected instant to be after 2024-03-01T09:00:00Z because updates follow
//! creation, but found 2024-03-01T08:59:00Z.
//! ```
//!
//! ## Features
//!
//! - **One adapter per type** - instants, durations, offsets, civil dates
//!   and times, zoned datetimes, annual dates and intervals
//! - **Null aware** - subjects are `Option`s; absent values render as `<null>`
//! - **Chaining** - every assertion continues with `.and()`
//! - **Scopes** - collect several failures with [`AssertionScope::collecting`]
//! - **Matchers** - reusable conditions in [`assertions::matcher`]
//!
//! ## Cargo features
//!
//! - `logging` - emit `log` records for passing assertions (trace),
//!   failures (debug) and rejected arguments (warn)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod logging;

pub mod assertions;
pub mod error;
pub mod format;
pub mod scope;
pub mod value;

/// Prelude for convenient imports
///
/// ```rust
/// use jiff_assertions::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assertions::{
        assert_annual_date, assert_date, assert_date_interval, assert_datetime, assert_duration,
        assert_instant, assert_interval, assert_offset, assert_temporal, assert_time,
        assert_zoned, AndConstraint, AndWhich, Assertions,
    };
    pub use crate::error::{Error, Result};
    pub use crate::scope::{AssertionScope, FailureStrategy};
    pub use crate::value::{AnnualDate, Calendar, DateInterval, Interval};
}

// Re-exports
pub use assertions::{
    assert_annual_date, assert_date, assert_date_interval, assert_datetime, assert_duration,
    assert_instant, assert_interval, assert_offset, assert_temporal, assert_time, assert_zoned,
};
pub use error::{Error, Result};
pub use scope::AssertionScope;
