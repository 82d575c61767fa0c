use std::fmt;

use jiff::civil::Date;

use crate::error::{Error, Result};

const MAX_DAYS: [i8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A month and day with no year attached, such as a birthday.
///
/// Annual dates order by month and then day. 29 February is a valid annual
/// date even though it only exists in leap years; see
/// [`AnnualDate::is_valid_in_year`].
///
/// # Example
///
/// ```rust
/// use jiff_assertions::value::AnnualDate;
///
/// let leap_day = AnnualDate::new(2, 29).unwrap();
/// assert!(leap_day.is_valid_in_year(2024));
/// assert!(!leap_day.is_valid_in_year(2023));
/// assert_eq!(leap_day.to_string(), "02-29");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct AnnualDate {
    month: i8,
    day: i8,
}

impl AnnualDate {
    /// Create an annual date from a month (1-12) and a day of that month.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the month is out of range or the
    /// day does not exist in that month in any year.
    pub fn new(month: i8, day: i8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_argument(
                "month",
                format!("must be in 1..=12, got {month}"),
            ));
        }
        let max = MAX_DAYS[usize::from(month.unsigned_abs()) - 1];
        if !(1..=max).contains(&day) {
            return Err(Error::invalid_argument(
                "day",
                format!("must be in 1..={max} for month {month}, got {day}"),
            ));
        }
        Ok(Self { month, day })
    }

    /// The month, from 1 to 12.
    #[must_use]
    pub fn month(self) -> i8 {
        self.month
    }

    /// The day of the month.
    #[must_use]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Whether this month and day exist in the given year.
    ///
    /// Only 29 February can be invalid, and only outside leap years. Years
    /// outside jiff's supported range are never valid.
    #[must_use]
    pub fn is_valid_in_year(self, year: i16) -> bool {
        Date::new(year, self.month, self.day).is_ok()
    }

    /// Resolve this annual date in a particular year.
    ///
    /// 29 February resolves to 28 February in non-leap years.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the year is outside the range
    /// jiff supports.
    pub fn in_year(self, year: i16) -> Result<Date> {
        let day = if self.month == 2 && self.day == 29 && !self.is_valid_in_year(year) {
            28
        } else {
            self.day
        };
        Date::new(year, self.month, day).map_err(|e| Error::invalid_argument("year", e.to_string()))
    }
}

impl From<Date> for AnnualDate {
    fn from(date: Date) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for AnnualDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
