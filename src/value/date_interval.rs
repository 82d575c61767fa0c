use std::fmt;

use jiff::civil::Date;

use crate::error::{Error, Result};

/// The calendar system a [`DateInterval`] is expressed in.
///
/// jiff dates are proleptic Gregorian, so both systems share the same
/// arithmetic. They differ as labels: intervals in different calendars are
/// never equal and never contain one another.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Calendar {
    /// ISO 8601.
    #[default]
    Iso,
    /// Gregorian.
    Gregorian,
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iso => f.write_str("ISO"),
            Self::Gregorian => f.write_str("Gregorian"),
        }
    }
}

/// An inclusive range of civil dates.
///
/// # Example
///
/// ```rust
/// use jiff::civil::date;
/// use jiff_assertions::value::DateInterval;
///
/// let january = DateInterval::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
/// assert_eq!(january.len(), 31);
/// assert!(january.contains(date(2024, 1, 31)));
/// assert!(!january.contains(date(2024, 2, 1)));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DateInterval {
    start: Date,
    end: Date,
    calendar: Calendar,
}

impl DateInterval {
    /// Create an ISO interval covering `start` through `end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `end` is before `start`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if end < start {
            return Err(Error::invalid_argument(
                "end",
                format!("{end} is before start {start}"),
            ));
        }
        Ok(Self {
            start,
            end,
            calendar: Calendar::Iso,
        })
    }

    /// Relabel this interval with another calendar system.
    #[must_use]
    pub fn with_calendar(self, calendar: Calendar) -> Self {
        Self { calendar, ..self }
    }

    /// The first date in the interval.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last date in the interval.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// The calendar system.
    #[must_use]
    pub fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Number of days in the interval, counting both ends.
    #[must_use]
    pub fn len(&self) -> i64 {
        self.end.duration_since(self.start).as_secs() / 86_400 + 1
    }

    /// Always false; an interval holds at least one day.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `date` falls on or between the start and end.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether `other` lies entirely within this interval.
    #[must_use]
    pub fn contains_interval(&self, other: &DateInterval) -> bool {
        self.calendar == other.calendar && self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)?;
        if self.calendar != Calendar::Iso {
            write!(f, " ({})", self.calendar)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_rejects_reversed_bounds() {
        let err = DateInterval::new(date(2024, 2, 1), date(2024, 1, 1)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_single_day() {
        let day = DateInterval::new(date(2024, 3, 10), date(2024, 3, 10)).unwrap();
        assert_eq!(day.len(), 1);
        assert!(day.contains(date(2024, 3, 10)));
    }

    #[test]
    fn test_len_across_leap_day() {
        let feb = DateInterval::new(date(2024, 2, 1), date(2024, 2, 29)).unwrap();
        assert_eq!(feb.len(), 29);
    }

    #[test]
    fn test_contains_interval() {
        let year = DateInterval::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        let march = DateInterval::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
        assert!(year.contains_interval(&march));
        assert!(year.contains_interval(&year));
        assert!(!march.contains_interval(&year));
        assert!(!year.contains_interval(&march.with_calendar(Calendar::Gregorian)));
    }

    #[test]
    fn test_display() {
        let iv = DateInterval::new(date(2024, 1, 1), date(2024, 1, 2)).unwrap();
        assert_eq!(iv.to_string(), "[2024-01-01, 2024-01-02]");
        assert_eq!(
            iv.with_calendar(Calendar::Gregorian).to_string(),
            "[2024-01-01, 2024-01-02] (Gregorian)"
        );
    }
}
