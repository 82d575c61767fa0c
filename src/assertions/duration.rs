use std::fmt;

use jiff::SignedDuration;

use super::{AndConstraint, Assertions};
use crate::scope::AssertionScope;

/// Assertions on a [`SignedDuration`].
pub type DurationAssertions<'s> = Assertions<'s, SignedDuration>;

/// Begin asserting on a duration in the global scope.
///
/// # Example
///
/// ```rust
/// use jiff::SignedDuration;
/// use jiff_assertions::assert_duration;
///
/// let elapsed = SignedDuration::from_millis(1_480);
/// assert_duration(elapsed)
///     .be_positive("")
///     .and()
///     .be_close_to(SignedDuration::from_millis(1_500), SignedDuration::from_millis(50), "");
/// ```
pub fn assert_duration(subject: impl Into<Option<SignedDuration>>) -> DurationAssertions<'static> {
    AssertionScope::global().that(subject)
}

impl Assertions<'_, SignedDuration> {
    /// Assert the duration is greater than zero.
    pub fn be_positive(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect("be positive", &because, |d| d.is_positive(), |d| self.format(d));
        AndConstraint::new(self)
    }

    /// Assert the duration is less than zero.
    pub fn be_negative(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect("be negative", &because, |d| d.is_negative(), |d| self.format(d));
        AndConstraint::new(self)
    }

    /// Assert the duration is zero.
    pub fn be_zero(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect("be zero", &because, |d| d.is_zero(), |d| self.format(d));
        AndConstraint::new(self)
    }

    /// Assert the duration is not zero.
    pub fn not_be_zero(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not("be zero", &because, |d| !d.is_zero(), |d| self.format(d));
        AndConstraint::new(self)
    }
}
