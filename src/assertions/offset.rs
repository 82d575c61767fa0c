use std::fmt;

use jiff::tz::Offset;

use super::{AndConstraint, Assertions};
use crate::scope::AssertionScope;

/// Assertions on a UTC [`Offset`].
pub type OffsetAssertions<'s> = Assertions<'s, Offset>;

/// Begin asserting on an offset in the global scope.
///
/// # Example
///
/// ```rust
/// use jiff::tz::Offset;
/// use jiff_assertions::assert_offset;
///
/// let ist = Offset::from_seconds(5 * 3600 + 1800).unwrap();
/// assert_offset(ist)
///     .have_seconds(19_800, "")
///     .and()
///     .be_greater_than(Offset::UTC, "")
///     .and()
///     .be_positive("");
/// ```
pub fn assert_offset(subject: impl Into<Option<Offset>>) -> OffsetAssertions<'static> {
    AssertionScope::global().that(subject)
}

impl Assertions<'_, Offset> {
    /// Assert the total offset from UTC in seconds.
    pub fn have_seconds(&self, expected: i32, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have {expected} seconds"),
            &because,
            |o| o.seconds() == expected,
            |o| o.seconds().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the offset is east of UTC.
    pub fn be_positive(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect("be positive", &because, |o| o.is_positive(), |o| self.format(o));
        AndConstraint::new(self)
    }

    /// Assert the offset is west of UTC.
    pub fn be_negative(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect("be negative", &because, |o| o.is_negative(), |o| self.format(o));
        AndConstraint::new(self)
    }

    /// Assert the offset is zero.
    pub fn be_utc(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect("be UTC", &because, |o| *o == Offset::UTC, |o| self.format(o));
        AndConstraint::new(self)
    }
}
