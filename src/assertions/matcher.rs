// Matcher factories return a value only meaningful once handed to
// `Assertions::satisfy`, so flagging each of them as must_use adds noise.
#![allow(clippy::must_use_candidate)]

//! Reusable, composable conditions on temporal values.
//!
//! This module provides a matcher system for conditions that do not fit a
//! single adapter method, or that a test wants to reuse:
//!
//! - [`Matcher`] trait for custom matchers
//! - Built-in matchers: [`equal_to`], [`after`], [`before`],
//!   [`on_or_after`], [`on_or_before`], [`within`], [`satisfies`]
//! - Combinators: [`all_of`], [`any_of`], [`not`]
//!
//! Matchers describe values with `Display`; the scope's formatter registry
//! is only consulted for the subject itself.
//!
//! # Example
//!
//! ```rust
//! use jiff::{SignedDuration, Timestamp};
//! use jiff_assertions::assert_instant;
//! use jiff_assertions::assertions::matcher::{not, within, Matcher};
//!
//! let noon: Timestamp = "2024-01-01T12:00:00Z".parse().unwrap();
//! let near_noon = within(noon, SignedDuration::from_mins(5));
//! let lunch: Timestamp = "2024-01-01T12:04:00Z".parse().unwrap();
//! assert!(near_noon.matches(&lunch));
//!
//! assert_instant(Timestamp::UNIX_EPOCH).satisfy(&not(near_noon), "");
//! ```

use std::fmt::Display;

use jiff::SignedDuration;

use super::tolerance::{check_precision, is_within, Distance};

/// A condition on values of `T`.
///
/// # Implementing Custom Matchers
///
/// ```rust
/// use jiff::civil::{date, Date, Weekday};
/// use jiff_assertions::assertions::matcher::Matcher;
///
/// struct Weekend;
///
/// impl Matcher<Date> for Weekend {
///     fn matches(&self, value: &Date) -> bool {
///         matches!(value.weekday(), Weekday::Saturday | Weekday::Sunday)
///     }
///
///     fn describe(&self) -> String {
///         "on a weekend".to_string()
///     }
///
///     fn describe_mismatch(&self, value: &Date) -> String {
///         format!("{} is a {:?}", value, value.weekday())
///     }
/// }
///
/// assert!(Weekend.matches(&date(2024, 6, 1)));
/// assert!(!Weekend.matches(&date(2024, 6, 3)));
/// ```
pub trait Matcher<T: ?Sized> {
    /// Check if the value matches.
    fn matches(&self, value: &T) -> bool;

    /// Describe what this matcher expects, phrased to follow "to be".
    fn describe(&self) -> String;

    /// Describe why a value didn't match.
    fn describe_mismatch(&self, value: &T) -> String;
}

// =============================================================================
// Built-in Matchers
// =============================================================================

/// Create an equality matcher.
pub fn equal_to<T: PartialEq + Display>(expected: T) -> EqualToMatcher<T> {
    EqualToMatcher { expected }
}

/// Matcher for equality.
pub struct EqualToMatcher<T> {
    expected: T,
}

impl<T: PartialEq + Display> Matcher<T> for EqualToMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        value == &self.expected
    }

    fn describe(&self) -> String {
        format!("equal to {}", self.expected)
    }

    fn describe_mismatch(&self, value: &T) -> String {
        format!("{value} is not equal to {}", self.expected)
    }
}

/// Create a matcher for values strictly later than `bound`.
///
/// # Example
///
/// ```rust
/// use jiff::civil::date;
/// use jiff_assertions::assertions::matcher::{after, Matcher};
///
/// let m = after(date(2024, 1, 1));
/// assert!(m.matches(&date(2024, 1, 2)));
/// assert!(!m.matches(&date(2024, 1, 1)));
/// ```
pub fn after<T: Ord + Display>(bound: T) -> BoundMatcher<T> {
    BoundMatcher::new(bound, Bound::After)
}

/// Create a matcher for values strictly earlier than `bound`.
pub fn before<T: Ord + Display>(bound: T) -> BoundMatcher<T> {
    BoundMatcher::new(bound, Bound::Before)
}

/// Create a matcher for values at or later than `bound`.
pub fn on_or_after<T: Ord + Display>(bound: T) -> BoundMatcher<T> {
    BoundMatcher::new(bound, Bound::OnOrAfter)
}

/// Create a matcher for values at or earlier than `bound`.
pub fn on_or_before<T: Ord + Display>(bound: T) -> BoundMatcher<T> {
    BoundMatcher::new(bound, Bound::OnOrBefore)
}

#[derive(Clone, Copy, Debug)]
enum Bound {
    After,
    Before,
    OnOrAfter,
    OnOrBefore,
}

impl Bound {
    fn relation(self) -> &'static str {
        match self {
            Self::After => "after",
            Self::Before => "before",
            Self::OnOrAfter => "on or after",
            Self::OnOrBefore => "on or before",
        }
    }
}

/// Matcher for a one-sided bound.
pub struct BoundMatcher<T> {
    bound: T,
    kind: Bound,
}

impl<T> BoundMatcher<T> {
    fn new(bound: T, kind: Bound) -> Self {
        Self { bound, kind }
    }
}

impl<T: Ord + Display> Matcher<T> for BoundMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        match self.kind {
            Bound::After => value > &self.bound,
            Bound::Before => value < &self.bound,
            Bound::OnOrAfter => value >= &self.bound,
            Bound::OnOrBefore => value <= &self.bound,
        }
    }

    fn describe(&self) -> String {
        format!("{} {}", self.kind.relation(), self.bound)
    }

    fn describe_mismatch(&self, value: &T) -> String {
        format!("{value} is not {} {}", self.kind.relation(), self.bound)
    }
}

/// Create a matcher for values within `precision` of `expected`.
///
/// # Panics
///
/// Panics with an [`Error::InvalidArgument`](crate::Error::InvalidArgument)
/// payload if `precision` is negative.
pub fn within<T: Distance>(expected: T, precision: SignedDuration) -> WithinMatcher<T> {
    check_precision(precision);
    WithinMatcher {
        expected,
        precision,
    }
}

/// Matcher for closeness.
pub struct WithinMatcher<T> {
    expected: T,
    precision: SignedDuration,
}

impl<T: Distance> Matcher<T> for WithinMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        is_within(value, &self.expected, self.precision)
    }

    fn describe(&self) -> String {
        format!("within {:#} from {}", self.precision, self.expected)
    }

    fn describe_mismatch(&self, value: &T) -> String {
        match value.distance(&self.expected) {
            Some(distance) => format!("{value} is {distance:#} away from {}", self.expected),
            None => format!("{value} is further than any duration from {}", self.expected),
        }
    }
}

/// Create a predicate-based matcher.
///
/// # Example
///
/// ```rust
/// use jiff::civil::date;
/// use jiff_assertions::assertions::matcher::{satisfies, Matcher};
///
/// let m = satisfies(|d: &jiff::civil::Date| d.day() == 1, "the first of a month");
/// assert!(m.matches(&date(2024, 5, 1)));
/// assert!(!m.matches(&date(2024, 5, 2)));
/// ```
pub fn satisfies<T, F>(predicate: F, description: &str) -> PredicateMatcher<F>
where
    F: Fn(&T) -> bool,
{
    PredicateMatcher {
        predicate,
        description: description.to_string(),
    }
}

/// Matcher based on a predicate function.
pub struct PredicateMatcher<F> {
    predicate: F,
    description: String,
}

impl<T: Display, F: Fn(&T) -> bool> Matcher<T> for PredicateMatcher<F> {
    fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        format!("{value} is not {}", self.description)
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Create a matcher that matches when all matchers match.
///
/// # Example
///
/// ```rust
/// use jiff::civil::{date, Date};
/// use jiff_assertions::assertions::matcher::{all_of, before, on_or_after, Matcher};
///
/// let matchers: Vec<Box<dyn Matcher<Date>>> = vec![
///     Box::new(on_or_after(date(2024, 1, 1))),
///     Box::new(before(date(2025, 1, 1))),
/// ];
/// let in_2024 = all_of(matchers);
/// assert!(in_2024.matches(&date(2024, 12, 31)));
/// assert!(!in_2024.matches(&date(2025, 1, 1)));
/// ```
pub fn all_of<T>(matchers: Vec<Box<dyn Matcher<T>>>) -> AllOfMatcher<T> {
    AllOfMatcher { matchers }
}

/// Matcher that requires all inner matchers to match.
pub struct AllOfMatcher<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

impl<T> Matcher<T> for AllOfMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        self.matchers.iter().all(|m| m.matches(value))
    }

    fn describe(&self) -> String {
        if self.matchers.is_empty() {
            return "anything".to_string();
        }
        let descriptions: Vec<_> = self.matchers.iter().map(|m| m.describe()).collect();
        descriptions.join(" and ")
    }

    fn describe_mismatch(&self, value: &T) -> String {
        let failures: Vec<_> = self
            .matchers
            .iter()
            .filter(|m| !m.matches(value))
            .map(|m| m.describe_mismatch(value))
            .collect();
        failures.join("; ")
    }
}

/// Create a matcher that matches when any matcher matches.
pub fn any_of<T>(matchers: Vec<Box<dyn Matcher<T>>>) -> AnyOfMatcher<T> {
    AnyOfMatcher { matchers }
}

/// Matcher that requires at least one inner matcher to match.
pub struct AnyOfMatcher<T: ?Sized> {
    matchers: Vec<Box<dyn Matcher<T>>>,
}

impl<T: Display> Matcher<T> for AnyOfMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        self.matchers.iter().any(|m| m.matches(value))
    }

    fn describe(&self) -> String {
        if self.matchers.is_empty() {
            return "one of no alternatives".to_string();
        }
        let descriptions: Vec<_> = self.matchers.iter().map(|m| m.describe()).collect();
        format!("either {}", descriptions.join(" or "))
    }

    fn describe_mismatch(&self, value: &T) -> String {
        format!("{value} matched none of them")
    }
}

/// Create a negating matcher.
pub fn not<T, M: Matcher<T> + 'static>(matcher: M) -> NotMatcher<T> {
    NotMatcher {
        inner: Box::new(matcher),
    }
}

/// Matcher that negates another matcher.
pub struct NotMatcher<T: ?Sized> {
    inner: Box<dyn Matcher<T>>,
}

impl<T: Display> Matcher<T> for NotMatcher<T> {
    fn matches(&self, value: &T) -> bool {
        !self.inner.matches(value)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }

    fn describe_mismatch(&self, value: &T) -> String {
        format!("{value} is {}", self.inner.describe())
    }
}

impl<T: ?Sized> Matcher<T> for Box<dyn Matcher<T>> {
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &T) -> String {
        (**self).describe_mismatch(value)
    }
}
