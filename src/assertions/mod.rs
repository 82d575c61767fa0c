//! Fluent assertions for temporal values.
//!
//! One adapter exists per temporal type. Every adapter is an
//! [`Assertions`] over that type, so all of them share:
//!
//! - [`be`](Assertions::be) / [`not_be`](Assertions::not_be) - equality,
//!   where an absent subject equals an absent expectation
//! - [`be_none`](Assertions::be_none) / [`not_be_none`](Assertions::not_be_none)
//! - [`satisfy`](Assertions::satisfy) - check against a [`matcher`]
//!
//! Points in time additionally get `be_after`/`be_before` style ordering,
//! quantities get `be_greater_than`/`be_less_than` style ordering (see
//! [`ordering`]), and types with a meaningful distance get
//! [`be_close_to`](Assertions::be_close_to) (see [`tolerance`]). The rest is
//! type specific and lives next to each entry point:
//!
//! - [`assert_annual_date`] - [`AnnualDate`](crate::value::AnnualDate)
//! - [`assert_date_interval`] - [`DateInterval`](crate::value::DateInterval)
//! - [`assert_duration`] - [`jiff::SignedDuration`]
//! - [`assert_instant`] - [`jiff::Timestamp`]
//! - [`assert_interval`] - [`Interval`](crate::value::Interval)
//! - [`assert_offset`] - [`jiff::tz::Offset`]
//! - [`assert_date`], [`assert_datetime`], [`assert_time`] - civil types
//! - [`assert_zoned`] - [`jiff::Zoned`]
//!
//! Each assertion takes a trailing `because` argument explaining why the
//! condition should hold. Pass `""` for none, or anything that implements
//! `Display`, including `format_args!`.
//!
//! # Example
//!
//! ```rust
//! use jiff::{SignedDuration, Timestamp};
//! use jiff_assertions::assert_instant;
//!
//! let deadline: Timestamp = "2024-06-01T12:00:00Z".parse().unwrap();
//! let submitted: Timestamp = "2024-06-01T11:59:58Z".parse().unwrap();
//!
//! assert_instant(submitted)
//!     .be_before(deadline, "late submissions are rejected")
//!     .and()
//!     .be_close_to(deadline, SignedDuration::from_secs(5), "");
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::format::{Temporal, NULL};
use crate::scope::{reason, AssertionScope};

mod annual_date;
mod civil;
mod date_interval;
mod duration;
mod instant;
mod interval;
pub mod matcher;
mod offset;
pub mod ordering;
pub mod tolerance;
mod zoned;

pub use annual_date::{assert_annual_date, AnnualDateAssertions};
pub use civil::{
    assert_date, assert_datetime, assert_time, DateAssertions, DateTimeAssertions, TimeAssertions,
};
pub use date_interval::{assert_date_interval, DateIntervalAssertions};
pub use duration::{assert_duration, DurationAssertions};
pub use instant::{assert_instant, InstantAssertions};
pub use interval::{assert_interval, IntervalAssertions};
pub use offset::{assert_offset, OffsetAssertions};
pub use zoned::{assert_zoned, ZonedAssertions};

use matcher::Matcher;

/// Begin asserting on any [`Temporal`] value in the global scope.
///
/// # Example
///
/// ```rust
/// use jiff::civil::date;
/// use jiff_assertions::assert_temporal;
///
/// assert_temporal(date(2024, 2, 29)).be(date(2024, 2, 29), "");
/// ```
///
/// An `Option` subject needs the type spelled out, as in
/// `assert_temporal::<Date>(maybe)`, because `Option<Date>` alone does not
/// say which `Temporal` type is meant.
pub fn assert_temporal<T: Temporal>(subject: impl Into<Option<T>>) -> Assertions<'static, T> {
    AssertionScope::global().that(subject)
}

/// Fluent assertions over one optional temporal value.
///
/// Created by the `assert_*` entry points or [`AssertionScope::that`]. The
/// subject is captured once and never modified.
pub struct Assertions<'s, T> {
    subject: Option<T>,
    name: Cow<'static, str>,
    scope: &'s AssertionScope,
}

/// Continuation returned by every assertion.
///
/// Use [`and`](AndConstraint::and) to chain another assertion on the same
/// subject.
pub struct AndConstraint<'a, A> {
    parent: &'a A,
}

impl<'a, A> AndConstraint<'a, A> {
    pub(crate) fn new(parent: &'a A) -> Self {
        Self { parent }
    }

    /// The adapter the assertion was made on.
    pub fn and(&self) -> &'a A {
        self.parent
    }
}

/// Continuation that also carries the value an assertion just validated.
pub struct AndWhich<'a, A, W> {
    parent: &'a A,
    which: Option<W>,
}

impl<'a, A, W> AndWhich<'a, A, W> {
    pub(crate) fn new(parent: &'a A, which: Option<W>) -> Self {
        Self { parent, which }
    }

    /// The adapter the assertion was made on.
    pub fn and(&self) -> &'a A {
        self.parent
    }

    /// The validated value, or `None` if the assertion failed in a
    /// collecting scope.
    pub fn which(&self) -> Option<&W> {
        self.which.as_ref()
    }
}

impl<'s, T: Temporal> Assertions<'s, T> {
    pub(crate) fn new(subject: Option<T>, scope: &'s AssertionScope) -> Self {
        Self {
            subject,
            name: Cow::Borrowed(T::NAME),
            scope,
        }
    }

    /// Refer to the subject by `name` in failure messages.
    ///
    /// ```rust
    /// use jiff::SignedDuration;
    /// use jiff_assertions::scope::AssertionScope;
    ///
    /// let scope = AssertionScope::collecting();
    /// scope.that(SignedDuration::ZERO).named("timeout").be_positive("");
    /// assert!(scope.take_failures()[0].starts_with("Expected timeout to be positive"));
    /// ```
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// The value under test.
    pub fn subject(&self) -> Option<&T> {
        self.subject.as_ref()
    }

    /// The scope failures are reported to.
    pub fn scope(&self) -> &'s AssertionScope {
        self.scope
    }

    /// Assert the subject equals `expected`.
    ///
    /// An absent subject equals an absent expectation.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the values differ.
    pub fn be(&self, expected: impl Into<Option<T>>, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        let expected = expected.into();
        self.scope.check(self.subject == expected, || {
            format!(
                "Expected {} to be {}{}, but found {}.",
                self.name,
                self.scope.formatters().format_option(expected.as_ref()),
                reason(&because),
                self.format_subject(),
            )
        });
        AndConstraint::new(self)
    }

    /// Assert the subject does not equal `unexpected`.
    ///
    /// # Panics
    ///
    /// Panics in a panicking scope if the values are equal.
    pub fn not_be(&self, unexpected: impl Into<Option<T>>, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        let unexpected = unexpected.into();
        self.scope.check(self.subject != unexpected, || {
            format!(
                "Did not expect {} to be {}{}.",
                self.name,
                self.scope.formatters().format_option(unexpected.as_ref()),
                reason(&because),
            )
        });
        AndConstraint::new(self)
    }

    /// Assert there is no subject.
    pub fn be_none(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.scope.check(self.subject.is_none(), || {
            format!(
                "Expected {} to be {NULL}{}, but found {}.",
                self.name,
                reason(&because),
                self.format_subject(),
            )
        });
        AndConstraint::new(self)
    }

    /// Assert there is a subject.
    pub fn not_be_none(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.scope.check(self.subject.is_some(), || {
            format!("Expected {} not to be {NULL}{}.", self.name, reason(&because))
        });
        AndConstraint::new(self)
    }

    /// Assert the subject satisfies `matcher`. An absent subject never does.
    ///
    /// ```rust
    /// use jiff::civil::{date, Date};
    /// use jiff_assertions::assert_date;
    /// use jiff_assertions::assertions::matcher::{after, all_of, before, Matcher};
    ///
    /// let first_quarter: Vec<Box<dyn Matcher<Date>>> = vec![
    ///     Box::new(after(date(2023, 12, 31))),
    ///     Box::new(before(date(2024, 4, 1))),
    /// ];
    /// assert_date(date(2024, 2, 14)).satisfy(&all_of(first_quarter), "");
    /// ```
    pub fn satisfy<M: Matcher<T> + ?Sized>(&self, matcher: &M, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        let matched = self.subject.as_ref().map_or(false, |s| matcher.matches(s));
        self.scope.check(matched, || {
            let mismatch = self
                .subject
                .as_ref()
                .map_or_else(|| format!("found {NULL}"), |s| matcher.describe_mismatch(s));
            format!(
                "Expected {} to be {}{}, but {}.",
                self.name,
                matcher.describe(),
                reason(&because),
                mismatch,
            )
        });
        AndConstraint::new(self)
    }

    pub(crate) fn format<V: Temporal>(&self, value: &V) -> String {
        self.scope.formatters().format(value)
    }

    pub(crate) fn format_subject(&self) -> String {
        self.scope.formatters().format_option(self.subject.as_ref())
    }

    /// Check a property of a present subject.
    ///
    /// An absent subject always fails. `actual` renders what was found
    /// instead.
    pub(crate) fn expect(
        &self,
        what: impl fmt::Display,
        because: &dyn fmt::Display,
        holds: impl FnOnce(&T) -> bool,
        actual: impl FnOnce(&T) -> String,
    ) -> bool {
        let holds = self.subject.as_ref().map_or(false, holds);
        self.scope.check(holds, || {
            let found = self.subject.as_ref().map_or_else(|| NULL.to_string(), actual);
            format!(
                "Expected {} to {}{}, but found {}.",
                self.name,
                what,
                reason(because),
                found
            )
        })
    }

    /// Check a property of a present subject does not hold.
    ///
    /// `passes` decides success for a present subject; an absent subject
    /// always fails.
    pub(crate) fn expect_not(
        &self,
        what: impl fmt::Display,
        because: &dyn fmt::Display,
        passes: impl FnOnce(&T) -> bool,
        actual: impl FnOnce(&T) -> String,
    ) -> bool {
        let passes = self.subject.as_ref().map_or(false, passes);
        self.scope.check(passes, || {
            let found = self.subject.as_ref().map_or_else(|| NULL.to_string(), actual);
            format!(
                "Did not expect {} to {}{}, but found {}.",
                self.name,
                what,
                reason(because),
                found
            )
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Assertions<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertions")
            .field("subject", &self.subject)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::{date, Date};

    #[test]
    fn test_be_and_not_be() {
        let d = date(2024, 5, 6);
        assert_temporal(d).be(d, "").and().not_be(date(2024, 5, 7), "");
        assert_temporal::<Date>(None).be(None, "").and().not_be(d, "");
        assert_temporal(d).not_be(None, "");
    }

    #[test]
    #[should_panic(expected = "Expected date to be 2024-05-07 because it is tomorrow, but found 2024-05-06.")]
    fn test_be_failure_message() {
        assert_temporal(date(2024, 5, 6)).be(date(2024, 5, 7), "it is tomorrow");
    }

    #[test]
    #[should_panic(expected = "Expected date to be 2024-05-07, but found <null>.")]
    fn test_be_null_subject() {
        assert_temporal::<Date>(None).be(date(2024, 5, 7), "");
    }

    #[test]
    #[should_panic(expected = "Did not expect date to be <null>.")]
    fn test_not_be_both_null() {
        assert_temporal::<Date>(None).not_be(None, "");
    }

    #[test]
    fn test_be_none() {
        let scope = AssertionScope::collecting();
        scope.that::<Date>(None).be_none("").and().not_be(date(2024, 1, 1), "");
        scope.that(date(2024, 1, 1)).be_none("");
        scope.that::<Date>(None).not_be_none(format_args!("row {} was loaded", 7));
        assert_eq!(
            scope.take_failures(),
            vec![
                "Expected date to be <null>, but found 2024-01-01.",
                "Expected date not to be <null> because row 7 was loaded.",
            ]
        );
    }

    #[test]
    fn test_named_subject() {
        let scope = AssertionScope::collecting();
        let a = scope.that(date(2024, 1, 1)).named("expiry");
        assert_eq!(a.subject(), Some(&date(2024, 1, 1)));
        a.be(date(2024, 1, 2), "");
        assert!(scope.take_failures()[0].starts_with("Expected expiry to be 2024-01-02"));
    }

    #[test]
    fn test_and_which() {
        let scope = AssertionScope::collecting();
        let a = scope.that(date(2024, 1, 1));
        let which = AndWhich::new(&a, Some(3));
        assert_eq!(which.which(), Some(&3));
        assert!(std::ptr::eq(which.and(), &a));
    }
}
