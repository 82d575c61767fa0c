use std::fmt;

use super::{AndConstraint, Assertions};
use crate::scope::AssertionScope;
use crate::value::AnnualDate;

/// Assertions on an [`AnnualDate`].
pub type AnnualDateAssertions<'s> = Assertions<'s, AnnualDate>;

/// Begin asserting on an annual date in the global scope.
///
/// # Example
///
/// ```rust
/// use jiff_assertions::assert_annual_date;
/// use jiff_assertions::value::AnnualDate;
///
/// let birthday = AnnualDate::new(2, 29).unwrap();
/// assert_annual_date(birthday)
///     .have_month(2, "")
///     .and()
///     .have_day(29, "")
///     .and()
///     .not_be_valid_in_year(2023, "2023 is not a leap year");
/// ```
pub fn assert_annual_date(subject: impl Into<Option<AnnualDate>>) -> AnnualDateAssertions<'static> {
    AssertionScope::global().that(subject)
}

impl Assertions<'_, AnnualDate> {
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

    /// Assert the day of the month is not `unexpected`.
    pub fn not_have_day(&self, unexpected: i8, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("have day {unexpected}"),
            &because,
            |d| d.day() != unexpected,
            |d| d.day().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the month.
    pub fn have_month(&self, expected: i8, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have month {expected}"),
            &because,
            |d| d.month() == expected,
            |d| d.month().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the month is not `unexpected`.
    pub fn not_have_month(&self, unexpected: i8, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("have month {unexpected}"),
            &because,
            |d| d.month() != unexpected,
            |d| d.month().to_string(),
        );
        AndConstraint::new(self)
    }

    /// Assert the date exists in `year`.
    pub fn be_valid_in_year(&self, year: i16, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("be valid in year {year}"),
            &because,
            |d| d.is_valid_in_year(year),
            |d| self.format(d),
        );
        AndConstraint::new(self)
    }

    /// Assert the date does not exist in `year`.
    pub fn not_be_valid_in_year(&self, year: i16, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect_not(
            format_args!("be valid in year {year}"),
            &because,
            |d| !d.is_valid_in_year(year),
            |d| self.format(d),
        );
        AndConstraint::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annual(month: i8, day: i8) -> AnnualDate {
        AnnualDate::new(month, day).unwrap()
    }

    #[test]
    fn test_fields() {
        assert_annual_date(annual(7, 4))
            .have_month(7, "")
            .and()
            .not_have_month(6, "")
            .and()
            .have_day(4, "")
            .and()
            .not_have_day(5, "");
    }

    #[test]
    #[should_panic(expected = "Expected annual date to have day 15, but found 14.")]
    fn test_have_day_failure() {
        assert_annual_date(annual(3, 14)).have_day(15, "");
    }

    #[test]
    #[should_panic(expected = "Expected annual date to have day 15, but found <null>.")]
    fn test_have_day_null() {
        assert_annual_date(None).have_day(15, "");
    }

    #[test]
    fn test_null_fails_every_structural_check() {
        let scope = AssertionScope::collecting();
        let none = scope.that::<AnnualDate>(None);
        none.have_day(1, "");
        none.not_have_day(1, "");
        none.have_month(1, "");
        none.not_have_month(1, "");
        none.be_valid_in_year(2024, "");
        none.not_be_valid_in_year(2024, "");
        let failures = scope.take_failures();
        assert_eq!(failures.len(), 6);
        assert!(failures.iter().all(|f| f.contains("<null>")));
    }

    #[test]
    fn test_validity_in_year() {
        let scope = AssertionScope::collecting();
        scope.that(annual(2, 29)).be_valid_in_year(2024, "");
        scope.that(annual(2, 29)).be_valid_in_year(2023, "");
        scope.that(annual(2, 28)).not_be_valid_in_year(2023, "");
        assert_eq!(
            scope.take_failures(),
            vec![
                "Expected annual date to be valid in year 2023, but found 02-29.",
                "Did not expect annual date to be valid in year 2023, but found 02-28.",
            ]
        );
    }

    #[test]
    fn test_ordering() {
        assert_annual_date(annual(12, 25))
            .be_after(annual(12, 24), "")
            .and()
            .be_before(annual(12, 26), "")
            .and()
            .be(annual(12, 25), "");
    }
}
