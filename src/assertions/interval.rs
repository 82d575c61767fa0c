use std::fmt;

use jiff::{SignedDuration, Timestamp};

use super::{AndConstraint, AndWhich, Assertions};
use crate::format::NULL;
use crate::scope::AssertionScope;
use crate::value::Interval;

/// Assertions on an [`Interval`].
pub type IntervalAssertions<'s> = Assertions<'s, Interval>;

/// Begin asserting on an interval in the global scope.
///
/// # Example
///
/// ```rust
/// use jiff::{SignedDuration, Timestamp};
/// use jiff_assertions::assert_interval;
/// use jiff_assertions::value::Interval;
///
/// let start = Timestamp::from_second(0).unwrap();
/// let end = Timestamp::from_second(3600).unwrap();
/// let window = Interval::between(start, end).unwrap();
///
/// let assertions = assert_interval(window);
/// let started = assertions.have_start("");
/// assert_eq!(started.which(), Some(&start));
/// started
///     .and()
///     .end_at(end, "")
///     .and()
///     .have_duration(SignedDuration::from_hours(1), "")
///     .and()
///     .not_contain(end, "the end is exclusive");
/// ```
pub fn assert_interval(subject: impl Into<Option<Interval>>) -> IntervalAssertions<'static> {
    AssertionScope::global().that(subject)
}

fn bound(bound: Option<Timestamp>, missing: &str, format: impl FnOnce(&Timestamp) -> String) -> String {
    bound.as_ref().map_or_else(|| missing.to_string(), format)
}

impl Assertions<'_, Interval> {
    /// Assert the interval has a start, continuing with that start.
    pub fn have_start(&self, because: impl fmt::Display) -> AndWhich<'_, Self, Timestamp> {
        self.expect("have a start", &because, Interval::has_start, |iv| self.format(iv));
        AndWhich::new(self, self.subject().and_then(Interval::start))
    }

    /// Assert the interval extends back to the start of time.
    pub fn not_have_start(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not("have a start", &because, |iv| !iv.has_start(), |iv| self.format(iv));
        AndConstraint::new(self)
    }

    /// Assert the interval has an end, continuing with that end.
    pub fn have_end(&self, because: impl fmt::Display) -> AndWhich<'_, Self, Timestamp> {
        self.expect("have an end", &because, Interval::has_end, |iv| self.format(iv));
        AndWhich::new(self, self.subject().and_then(Interval::end))
    }

    /// Assert the interval extends to the end of time.
    pub fn not_have_end(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not("have an end", &because, |iv| !iv.has_end(), |iv| self.format(iv));
        AndConstraint::new(self)
    }

    /// Assert the interval starts at `expected`.
    ///
    /// An interval without a start fails.
    pub fn start_at(&self, expected: Timestamp, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("start at {}", self.format(&expected)),
            &because,
            |iv| iv.start() == Some(expected),
            |iv| bound(iv.start(), "no start", |s| self.format(s)),
        );
        AndConstraint::new(self)
    }

    /// Assert the interval does not start at `unexpected`.
    ///
    /// An interval without a start passes without further checks.
    pub fn not_start_at(&self, unexpected: Timestamp, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("start at {}", self.format(&unexpected)),
            &because,
            |iv| iv.start() != Some(unexpected),
            |iv| bound(iv.start(), NULL, |s| self.format(s)),
        );
        AndConstraint::new(self)
    }

    /// Assert the interval ends at `expected`.
    ///
    /// An interval without an end fails.
    pub fn end_at(&self, expected: Timestamp, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("end at {}", self.format(&expected)),
            &because,
            |iv| iv.end() == Some(expected),
            |iv| bound(iv.end(), "no end", |e| self.format(e)),
        );
        AndConstraint::new(self)
    }

    /// Assert the interval does not end at `unexpected`.
    ///
    /// An interval without an end passes without further checks.
    pub fn not_end_at(&self, unexpected: Timestamp, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("end at {}", self.format(&unexpected)),
            &because,
            |iv| iv.end() != Some(unexpected),
            |iv| bound(iv.end(), NULL, |e| self.format(e)),
        );
        AndConstraint::new(self)
    }

    /// Assert the time between start and end.
    ///
    /// An interval missing either bound has no duration and fails.
    pub fn have_duration(&self, expected: SignedDuration, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have duration {}", self.format(&expected)),
            &because,
            |iv| iv.duration() == Some(expected),
            |iv| {
                iv.duration()
                    .map_or_else(|| "an unbounded interval".to_string(), |d| self.format(&d))
            },
        );
        AndConstraint::new(self)
    }

    /// Assert the time between start and end is not `unexpected`.
    ///
    /// An interval missing either bound passes without further checks.
    pub fn not_have_duration(&self, unexpected: SignedDuration, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("have duration {}", self.format(&unexpected)),
            &because,
            |iv| iv.duration() != Some(unexpected),
            |iv| iv.duration().map_or_else(|| NULL.to_string(), |d| self.format(&d)),
        );
        AndConstraint::new(self)
    }

    /// Assert `instant` falls within the interval.
    pub fn contain(&self, instant: Timestamp, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("contain {}", self.format(&instant)),
            &because,
            |iv| iv.contains(instant),
            |iv| self.format(iv),
        );
        AndConstraint::new(self)
    }

    /// Assert `instant` falls outside the interval.
    pub fn not_contain(&self, instant: Timestamp, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("contain {}", self.format(&instant)),
            &because,
            |iv| !iv.contains(instant),
            |iv| self.format(iv),
        );
        AndConstraint::new(self)
    }

    /// Assert `other` lies entirely within the interval.
    pub fn contain_interval(&self, other: &Interval, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("contain {}", self.format(other)),
            &because,
            |iv| iv.contains_interval(other),
            |iv| self.format(iv),
        );
        AndConstraint::new(self)
    }

    /// Assert `other` does not lie entirely within the interval.
    pub fn not_contain_interval(&self, other: &Interval, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("contain {}", self.format(other)),
            &because,
            |iv| !iv.contains_interval(other),
            |iv| self.format(iv),
        );
        AndConstraint::new(self)
    }
}
