//! Adapters for jiff's civil (time zone free) types.

use std::fmt;

use jiff::civil::{Date, DateTime, Time, Weekday};

use super::{AndConstraint, Assertions};
use crate::scope::AssertionScope;

/// Assertions on a civil [`Date`].
pub type DateAssertions<'s> = Assertions<'s, Date>;

/// Assertions on a civil [`DateTime`].
pub type DateTimeAssertions<'s> = Assertions<'s, DateTime>;

/// Assertions on a civil [`Time`].
pub type TimeAssertions<'s> = Assertions<'s, Time>;

/// Begin asserting on a date in the global scope.
///
/// # Example
///
/// ```rust
/// use jiff::civil::{date, Weekday};
/// use jiff_assertions::assert_date;
///
/// assert_date(date(2024, 2, 29))
///     .have_year(2024, "")
///     .and()
///     .be_in_leap_year("")
///     .and()
///     .be_on_weekday(Weekday::Thursday, "");
/// ```
pub fn assert_date(subject: impl Into<Option<Date>>) -> DateAssertions<'static> {
    AssertionScope::global().that(subject)
}

/// Begin asserting on a date and time in the global scope.
pub fn assert_datetime(subject: impl Into<Option<DateTime>>) -> DateTimeAssertions<'static> {
    AssertionScope::global().that(subject)
}

/// Begin asserting on a time of day in the global scope.
pub fn assert_time(subject: impl Into<Option<Time>>) -> TimeAssertions<'static> {
    AssertionScope::global().that(subject)
}

impl Assertions<'_, Date> {
    /// Assert the year.
    pub fn have_year(&self, expected: i16, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have year {expected}"),
            &because,
            |d| d.year() == expected,
            |d| d.year().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the month, from 1 to 12.
    pub fn have_month(&self, expected: i8, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have month {expected}"),
            &because,
            |d| d.month() == expected,
            |d| d.month().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the day of the month.
    pub fn have_day(&self, expected: i8, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have day {expected}"),
            &because,
            |d| d.day() == expected,
            |d| d.day().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the day of the week.
    pub fn be_on_weekday(&self, expected: Weekday, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("be on a {expected:?}"),
            &because,
            |d| d.weekday() == expected,
            |d| format!("{} (a {:?})", self.format(d), d.weekday()),
        );
        AndConstraint::new(self)
    }

    /// Assert the date falls in a leap year.
    pub fn be_in_leap_year(&self, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect("be in a leap year", &because, |d| d.in_leap_year(), |d| self.format(d));
        AndConstraint::new(self)
    }
}

impl Assertions<'_, DateTime> {
    /// Assert the date component.
    pub fn have_date(&self, expected: Date, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have date {}", self.format(&expected)),
            &because,
            |dt| dt.date() == expected,
            |dt| self.format(&dt.date()),
        );
        AndConstraint::new(self)
    }

    /// Assert the time component.
    pub fn have_time(&self, expected: Time, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have time {}", self.format(&expected)),
            &because,
            |dt| dt.time() == expected,
            |dt| self.format(&dt.time()),
        );
        AndConstraint::new(self)
    }
}

impl Assertions<'_, Time> {
    /// Assert the hour, from 0 to 23.
    pub fn have_hour(&self, expected: i8, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have hour {expected}"),
            &because,
            |t| t.hour() == expected,
            |t| t.hour().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the minute.
    pub fn have_minute(&self, expected: i8, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have minute {expected}"),
            &because,
            |t| t.minute() == expected,
            |t| t.minute().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the second.
    pub fn have_second(&self, expected: i8, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have second {expected}"),
            &because,
            |t| t.second() == expected,
            |t| t.second().to_string(),
        );
        AndConstraint::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::{date, time};
    use jiff::SignedDuration;

    #[test]
    fn test_date_fields() {
        assert_date(date(2023, 12, 25))
            .have_year(2023, "")
            .and()
            .have_month(12, "")
            .and()
            .have_day(25, "")
            .and()
            .be_on_weekday(Weekday::Monday, "");
    }

    #[test]
    #[should_panic(expected = "Expected date to be on a Sunday, but found 2023-12-25 (a Monday).")]
    fn test_weekday_failure() {
        assert_date(date(2023, 12, 25)).be_on_weekday(Weekday::Sunday, "");
    }

    #[test]
    #[should_panic(expected = "Expected date to be in a leap year, but found 2023-01-01.")]
    fn test_leap_year_failure() {
        assert_date(date(2023, 1, 1)).be_in_leap_year("");
    }

    #[test]
    fn test_datetime() {
        let dt = date(2024, 6, 1).at(9, 30, 0, 0);
        assert_datetime(dt)
            .have_date(date(2024, 6, 1), "")
            .and()
            .have_time(time(9, 30, 0, 0), "")
            .and()
            .be_after(date(2024, 6, 1).at(9, 29, 59, 0), "")
            .and()
            .be_close_to(date(2024, 6, 1).at(9, 31, 0, 0), SignedDuration::from_mins(1), "");
    }

    #[test]
    fn test_time() {
        assert_time(time(23, 59, 58, 0))
            .have_hour(23, "")
            .and()
            .have_minute(59, "")
            .and()
            .have_second(58, "")
            .and()
            .be_before(time(23, 59, 59, 0), "");
    }

    #[test]
    fn test_null_subjects() {
        let scope = AssertionScope::collecting();
        scope.that::<Date>(None).have_year(2024, "");
        scope.that::<Date>(None).be_in_leap_year("");
        scope.that::<DateTime>(None).have_time(time(0, 0, 0, 0), "");
        scope.that::<Time>(None).have_hour(0, "");
        let failures = scope.take_failures();
        assert_eq!(failures.len(), 4);
        assert!(failures.iter().all(|f| f.ends_with("but found <null>.")));
    }
}
