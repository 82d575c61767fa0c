use std::fmt;

use jiff::{SignedDuration, Timestamp};

use crate::error::{Error, Result};

/// A half-open range of instants, `[start, end)`.
///
/// Either bound may be absent, meaning the interval extends to the start or
/// end of time.
///
/// # Example
///
/// ```rust
/// use jiff::Timestamp;
/// use jiff_assertions::value::Interval;
///
/// let start = Timestamp::from_second(0).unwrap();
/// let end = Timestamp::from_second(60).unwrap();
/// let minute = Interval::between(start, end).unwrap();
///
/// assert!(minute.contains(start));
/// assert!(!minute.contains(end));
/// assert!(Interval::starting_at(start).duration().is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Interval {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
}

impl Interval {
    /// Create an interval from optional bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if both bounds are present and
    /// `end` is before `start`.
    pub fn new(start: Option<Timestamp>, end: Option<Timestamp>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if e < s {
                return Err(Error::invalid_argument(
                    "end",
                    format!("{e} is before start {s}"),
                ));
            }
        }
        Ok(Self { start, end })
    }

    /// Create a bounded interval.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `end` is before `start`.
    pub fn between(start: Timestamp, end: Timestamp) -> Result<Self> {
        Self::new(Some(start), Some(end))
    }

    /// An interval from `start` to the end of time.
    #[must_use]
    pub fn starting_at(start: Timestamp) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// An interval from the start of time up to `end`.
    #[must_use]
    pub fn ending_at(end: Timestamp) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// The interval covering all of time.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The inclusive start, if bounded.
    #[must_use]
    pub fn start(&self) -> Option<Timestamp> {
        self.start
    }

    /// The exclusive end, if bounded.
    #[must_use]
    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    /// Whether the interval has a start bound.
    #[must_use]
    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    /// Whether the interval has an end bound.
    #[must_use]
    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }

    /// Elapsed time from start to end, when both bounds exist.
    #[must_use]
    pub fn duration(&self) -> Option<SignedDuration> {
        Some(self.end?.duration_since(self.start?))
    }

    /// Whether `instant` is at or after the start and before the end.
    #[must_use]
    pub fn contains(&self, instant: Timestamp) -> bool {
        self.start.map_or(true, |s| s <= instant) && self.end.map_or(true, |e| instant < e)
    }

    /// Whether `other` lies entirely within this interval.
    #[must_use]
    pub fn contains_interval(&self, other: &Interval) -> bool {
        let start_ok = match (self.start, other.start) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(inner)) => outer <= inner,
        };
        let end_ok = match (self.end, other.end) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(inner)) => inner <= outer,
        };
        start_ok && end_ok
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{start}")?,
            None => f.write_str("StartOfTime")?,
        }
        f.write_str("/")?;
        match self.end {
            Some(end) => write!(f, "{end}"),
            None => f.write_str("EndOfTime"),
        }
    }
}
