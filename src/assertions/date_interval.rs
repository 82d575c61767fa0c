use std::fmt;

use jiff::civil::Date;

use super::{AndConstraint, Assertions};
use crate::scope::AssertionScope;
use crate::value::{Calendar, DateInterval};

/// Assertions on a [`DateInterval`].
pub type DateIntervalAssertions<'s> = Assertions<'s, DateInterval>;

/// Begin asserting on a date interval in the global scope.
///
/// # Example
///
/// ```rust
/// use jiff::civil::date;
/// use jiff_assertions::assert_date_interval;
/// use jiff_assertions::value::{Calendar, DateInterval};
///
/// let sprint = DateInterval::new(date(2024, 4, 1), date(2024, 4, 14)).unwrap();
/// assert_date_interval(sprint)
///     .have_length(14, "sprints last two weeks")
///     .and()
///     .contain(date(2024, 4, 14), "the end date is inclusive")
///     .and()
///     .have_calendar(Calendar::Iso, "");
/// ```
pub fn assert_date_interval(subject: impl Into<Option<DateInterval>>) -> DateIntervalAssertions<'static> {
    AssertionScope::global().that(subject)
}

impl Assertions<'_, DateInterval> {
    /// Assert the first date of the interval.
    pub fn have_start(&self, expected: Date, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have start {}", self.format(&expected)),
            &because,
            |iv| iv.start() == expected,
            |iv| self.format(&iv.start()),
        );
        AndConstraint::new(self)
    }

    /// Assert the first date of the interval is not `unexpected`.
    pub fn not_have_start(&self, unexpected: Date, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("have start {}", self.format(&unexpected)),
            &because,
            |iv| iv.start() != unexpected,
            |iv| self.format(&iv.start()),
        );
        AndConstraint::new(self)
    }

    /// Assert the last date of the interval.
    pub fn have_end(&self, expected: Date, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have end {}", self.format(&expected)),
            &because,
            |iv| iv.end() == expected,
            |iv| self.format(&iv.end()),
        );
        AndConstraint::new(self)
    }

    /// Assert the last date of the interval is not `unexpected`.
    pub fn not_have_end(&self, unexpected: Date, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("have end {}", self.format(&unexpected)),
            &because,
            |iv| iv.end() != unexpected,
            |iv| self.format(&iv.end()),
        );
        AndConstraint::new(self)
    }

    /// Assert the number of days, counting both ends.
    pub fn have_length(&self, days: i64, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have length {days}"),
            &because,
            |iv| iv.len() == days,
            |iv| iv.len().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the number of days is not `days`.
    pub fn not_have_length(&self, days: i64, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("have length {days}"),
            &because,
            |iv| iv.len() != days,
            |iv| iv.len().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert `date` falls within the interval.
    pub fn contain(&self, date: Date, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("contain {}", self.format(&date)),
            &because,
            |iv| iv.contains(date),
            |iv| self.format(iv),
        );
        AndConstraint::new(self)
    }

    /// Assert `date` falls outside the interval.
    pub fn not_contain(&self, date: Date, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("contain {}", self.format(&date)),
            &because,
            |iv| !iv.contains(date),
            |iv| self.format(iv),
        );
        AndConstraint::new(self)
    }

    /// Assert `other` lies entirely within the interval.
    pub fn contain_interval(&self, other: &DateInterval, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("contain {}", self.format(other)),
            &because,
            |iv| iv.contains_interval(other),
            |iv| self.format(iv),
        );
        AndConstraint::new(self)
    }

    /// Assert `other` does not lie entirely within the interval.
    pub fn not_contain_interval(&self, other: &DateInterval, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("contain {}", self.format(other)),
            &because,
            |iv| !iv.contains_interval(other),
            |iv| self.format(iv),
        );
        AndConstraint::new(self)
    }

    /// Assert the calendar system.
    pub fn have_calendar(&self, expected: Calendar, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have calendar {expected}"),
            &because,
            |iv| iv.calendar() == expected,
            |iv| iv.calendar().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the calendar system is not `unexpected`.
    pub fn not_have_calendar(&self, unexpected: Calendar, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("have calendar {unexpected}"),
            &because,
            |iv| iv.calendar() != unexpected,
            |iv| iv.calendar().to_string(),
        );
        AndConstraint::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn march() -> DateInterval {
        DateInterval::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap()
    }

    #[test]
    fn test_bounds_and_length() {
        assert_date_interval(march())
            .have_start(date(2024, 3, 1), "")
            .and()
            .not_have_start(date(2024, 3, 2), "")
            .and()
            .have_end(date(2024, 3, 31), "")
            .and()
            .not_have_end(date(2024, 3, 30), "")
            .and()
            .have_length(31, "")
            .and()
            .not_have_length(30, "");
    }

    #[test]
    fn test_containment() {
        let second_week = DateInterval::new(date(2024, 3, 8), date(2024, 3, 14)).unwrap();
        assert_date_interval(march())
            .contain(date(2024, 3, 1), "")
            .and()
            .not_contain(date(2024, 4, 1), "")
            .and()
            .contain_interval(&second_week, "")
            .and()
            .not_contain_interval(&second_week.with_calendar(Calendar::Gregorian), "");
    }

    #[test]
    #[should_panic(expected = "Expected date interval to contain 2024-04-01 because the billing cycle spans it, but found [2024-03-01, 2024-03-31].")]
    fn test_contain_failure() {
        assert_date_interval(march()).contain(date(2024, 4, 1), "the billing cycle spans it");
    }

    #[test]
    #[should_panic(expected = "Expected date interval to have length 30, but found 31.")]
    fn test_have_length_failure() {
        assert_date_interval(march()).have_length(30, "");
    }

    #[test]
    fn test_calendar() {
        let scope = AssertionScope::collecting();
        scope.that(march()).have_calendar(Calendar::Iso, "").and().not_have_calendar(Calendar::Gregorian, "");
        scope.that(march()).have_calendar(Calendar::Gregorian, "");
        assert_eq!(
            scope.take_failures(),
            vec!["Expected date interval to have calendar Gregorian, but found ISO."]
        );
    }

    #[test]
    fn test_null_fails_every_structural_check() {
        let scope = AssertionScope::collecting();
        let none = scope.that::<DateInterval>(None);
        none.have_start(date(2024, 1, 1), "");
        none.not_have_end(date(2024, 1, 1), "");
        none.have_length(1, "");
        none.contain(date(2024, 1, 1), "");
        none.not_contain(date(2024, 1, 1), "");
        none.contain_interval(&march(), "");
        none.have_calendar(Calendar::Iso, "");
        none.not_have_calendar(Calendar::Iso, "");
        let failures = scope.take_failures();
        assert_eq!(failures.len(), 8);
        assert!(failures.iter().all(|f| f.ends_with("but found <null>.")));
    }
}
