use std::fmt;

use jiff::tz::Offset;
use jiff::{Timestamp, Zoned};

use super::{AndConstraint, Assertions};
use crate::format::NULL;
use crate::scope::AssertionScope;

/// Assertions on a [`Zoned`] datetime.
pub type ZonedAssertions<'s> = Assertions<'s, Zoned>;

/// Begin asserting on a zoned datetime in the global scope.
///
/// # Example
///
/// ```rust
/// use jiff::tz::{Offset, TimeZone};
/// use jiff::Timestamp;
/// use jiff_assertions::assert_zoned;
///
/// let tz = TimeZone::fixed(Offset::constant(-5));
/// let zdt = Timestamp::UNIX_EPOCH.to_zoned(tz);
///
/// assert_zoned(zdt)
///     .have_offset(Offset::constant(-5), "")
///     .and()
///     .have_timestamp(Timestamp::UNIX_EPOCH, "");
/// ```
pub fn assert_zoned(subject: impl Into<Option<Zoned>>) -> ZonedAssertions<'static> {
    AssertionScope::global().that(subject)
}

impl Assertions<'_, Zoned> {
    /// Assert the IANA name of the time zone.
    ///
    /// A fixed offset of zero is named "UTC". Any other fixed offset is
    /// unnamed and never matches.
    pub fn have_time_zone(&self, expected: &str, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have time zone {expected:?}"),
            &because,
            |z| z.time_zone().iana_name() == Some(expected),
            |z| match z.time_zone().iana_name() {
                Some(name) => format!("{name:?}"),
                None => format!("an unnamed time zone ({NULL})"),
            },
        );
        AndConstraint::new(self)
    }

    /// Assert the offset in effect at this instant.
    pub fn have_offset(&self, expected: Offset, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have offset {}", self.format(&expected)),
            &because,
            |z| z.offset() == expected,
            |z| self.format(&z.offset()),
        );
        AndConstraint::new(self)
    }

    /// Assert the instant, ignoring the time zone.
    pub fn have_timestamp(&self, expected: Timestamp, because: impl fmt::Display) -> AndConstraint<'_, Self> {
        self.expect(
            format_args!("have timestamp {}", self.format(&expected)),
            &because,
            |z| z.timestamp() == expected,
            |z| self.format(&z.timestamp()),
        );
        AndConstraint::new(self)
    }
}
