//! Ordering assertions.
//!
//! Two vocabularies exist. Points in time read as "after" and "before":
//!
//! ```rust
//! use jiff::civil::date;
//! use jiff_assertions::assert_date;
//!
//! assert_date(date(2024, 3, 1))
//!     .be_after(date(2024, 2, 29), "")
//!     .and()
//!     .be_on_or_before(date(2024, 3, 1), "");
//! ```
//!
//! Quantities read as "greater" and "less":
//!
//! ```rust
//! use jiff::SignedDuration;
//! use jiff_assertions::assert_duration;
//!
//! assert_duration(SignedDuration::from_secs(90))
//!     .be_greater_than(SignedDuration::from_mins(1), "")
//!     .and()
//!     .be_less_than_or_equal_to(SignedDuration::from_secs(90), "");
//! ```
//!
//! An absent subject fails every ordering assertion.

use std::cmp::Ordering;
use std::fmt;

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::Offset;
use jiff::{SignedDuration, Timestamp, Zoned};

use super::{AndConstraint, Assertions};
use crate::format::Temporal;
use crate::value::AnnualDate;

/// A totally ordered type whose values are points on a timeline.
pub trait PointInTime: Temporal + Ord {}

/// A totally ordered type whose values are amounts.
pub trait Quantity: Temporal + Ord {}

impl PointInTime for Timestamp {}
impl PointInTime for Zoned {}
impl PointInTime for Date {}
impl PointInTime for DateTime {}
impl PointInTime for Time {}
impl PointInTime for AnnualDate {}

impl Quantity for SignedDuration {}
impl Quantity for Offset {}

impl<T: Temporal + Ord> Assertions<'_, T> {
    fn compare(
        &self,
        relation: &str,
        expected: &T,
        because: &dyn fmt::Display,
        accept: fn(Ordering) -> bool,
    ) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("be {relation} {}", self.format(expected)),
            because,
            |subject| accept(subject.cmp(expected)),
            |subject| self.format(subject),
        );
        AndConstraint::new(self)
    }
}

impl<T: PointInTime> Assertions<'_, T> {
    /// Assert the subject is strictly later than `expected`.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the assertion does not hold.
    pub fn be_after(&self, expected: T, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.compare("after", &expected, &because, Ordering::is_gt)
    }

    /// Assert the subject is strictly earlier than `expected`.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the assertion does not hold.
    pub fn be_before(&self, expected: T, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.compare("before", &expected, &because, Ordering::is_lt)
    }

    /// Assert the subject is `expected` or later.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the assertion does not hold.
    pub fn be_on_or_after(&self, expected: T, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.compare("on or after", &expected, &because, Ordering::is_ge)
    }

    /// Assert the subject is `expected` or earlier.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the assertion does not hold.
    pub fn be_on_or_before(&self, expected: T, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.compare("on or before", &expected, &because, Ordering::is_le)
    }
}

impl<T: Quantity> Assertions<'_, T> {
    /// Assert the subject is strictly greater than `expected`.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the assertion does not hold.
    pub fn be_greater_than(&self, expected: T, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.compare("greater than", &expected, &because, Ordering::is_gt)
    }

    /// Assert the subject is greater than or equal to `expected`.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the assertion does not hold.
    pub fn be_greater_than_or_equal_to(
        &self,
        expected: T,
        because: impl fmt::Display,
    ) -> AndConstraint<'_, Self> {
        self.compare("greater than or equal to", &expected, &because, Ordering::is_ge)
    }

    /// Assert the subject is strictly less than `expected`.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the assertion does not hold.
    pub fn be_less_than(&self, expected: T, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.compare("less than", &expected, &because, Ordering::is_lt)
    }

    /// Assert the subject is less than or equal to `expected`.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the assertion does not hold.
    pub fn be_less_than_or_equal_to(
        &self,
        expected: T,
        because: impl fmt::Display,
    ) -> AndConstraint<'_, Self> {
        self.compare("less than or equal to", &expected, &because, Ordering::is_le)
    }
}
