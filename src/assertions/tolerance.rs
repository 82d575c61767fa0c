//! "Close to" assertions.
//!
//! [`be_close_to`](Assertions::be_close_to) passes when the distance between
//! subject and expectation is at most the precision, boundary included.
//! The distance is always the larger operand minus the smaller, so it is
//! never negative. Two durations too far apart for the difference to fit in
//! a [`SignedDuration`] are further apart than any precision.
//!
//! A negative precision is a mistake in the test rather than a failed
//! assertion. It is raised with [`std::panic::panic_any`] carrying an
//! [`Error::InvalidArgument`] before anything is compared, even inside a
//! collecting scope.
//!
//! ```rust
//! use jiff::SignedDuration;
//! use jiff_assertions::assert_duration;
//!
//! let five = SignedDuration::from_secs(5);
//! let seven = SignedDuration::from_secs(7);
//! assert_duration(five).be_close_to(seven, SignedDuration::from_secs(3), "");
//! assert_duration(five).not_be_close_to(seven, SignedDuration::from_secs(1), "");
//! ```

use std::fmt;

use jiff::civil::DateTime;
use jiff::tz::Offset;
use jiff::{SignedDuration, Timestamp, Zoned};

use super::{AndConstraint, Assertions};
use crate::error::Error;
use crate::format::Temporal;

/// A type with a non-negative distance between any two values.
pub trait Distance: Temporal + Ord {
    /// The absolute distance between `self` and `other`.
    ///
    /// `None` when the distance does not fit in a [`SignedDuration`], which
    /// puts the values further apart than any precision.
    fn distance(&self, other: &Self) -> Option<SignedDuration>;
}

impl Distance for Timestamp {
    fn distance(&self, other: &Self) -> Option<SignedDuration> {
        Some(if self >= other {
            self.duration_since(*other)
        } else {
            other.duration_since(*self)
        })
    }
}

impl Distance for Zoned {
    fn distance(&self, other: &Self) -> Option<SignedDuration> {
        self.timestamp().distance(&other.timestamp())
    }
}

impl Distance for DateTime {
    fn distance(&self, other: &Self) -> Option<SignedDuration> {
        Some(if self >= other {
            self.duration_since(*other)
        } else {
            other.duration_since(*self)
        })
    }
}

impl Distance for SignedDuration {
    fn distance(&self, other: &Self) -> Option<SignedDuration> {
        let (larger, smaller) = if self >= other {
            (*self, *other)
        } else {
            (*other, *self)
        };
        larger.checked_sub(smaller)
    }
}

impl Distance for Offset {
    fn distance(&self, other: &Self) -> Option<SignedDuration> {
        let (larger, smaller) = if self >= other {
            (*self, *other)
        } else {
            (*other, *self)
        };
        Some(SignedDuration::from_secs(
            i64::from(larger.seconds()) - i64::from(smaller.seconds()),
        ))
    }
}

/// Whether `a` and `b` are at most `precision` apart.
pub(crate) fn is_within<T: Distance>(a: &T, b: &T, precision: SignedDuration) -> bool {
    a.distance(b).map_or(false, |d| d <= precision)
}

/// Raise a contract violation for a negative precision.
pub(crate) fn check_precision(precision: SignedDuration) {
    if precision.is_negative() {
        warn!("rejecting negative precision {precision:#}");
        std::panic::panic_any(Error::invalid_argument(
            "precision",
            format!("must not be negative, got {precision:#}"),
        ));
    }
}

impl<T: Distance> Assertions<'_, T> {
    /// Assert the subject is within `precision` of `expected`.
    ///
    /// # Panics
    ///
    /// Panics with an [`Error::InvalidArgument`] payload if `precision` is
    /// negative. Otherwise panics in a panicking scope if the subject is
    /// absent or further than `precision` away.
    pub fn be_close_to(
        &self,
        expected: T,
        precision: SignedDuration,
        because: impl fmt::Display,
    ) -> AndConstraint<'_, Self> {
        check_precision(precision);
        self.expect(
            format_args!(
                "be within {} from {}",
                self.format(&precision),
                self.format(&expected)
            ),
            &because,
            |subject| is_within(subject, &expected, precision),
            |subject| self.format(subject),
        );
        AndConstraint::new(self)
    }

    /// Assert the subject is further than `precision` from `expected`.
    ///
    /// # Panics
    ///
    /// Panics with an [`Error::InvalidArgument`] payload if `precision` is
    /// negative. Otherwise panics in a panicking scope if the subject is
    /// absent or within `precision`.
    pub fn not_be_close_to(
        &self,
        distant: T,
        precision: SignedDuration,
        because: impl fmt::Display,
    ) -> AndConstraint<'_, Self> {
        check_precision(precision);
        self.expect_not(
            format_args!(
                "be within {} from {}",
                self.format(&precision),
                self.format(&distant)
            ),
            &because,
            |subject| !is_within(subject, &distant, precision),
            |subject| self.format(subject),
        );
        AndConstraint::new(self)
    }
}
