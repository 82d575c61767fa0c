//! Temporal values that jiff itself does not model.
//!
//! jiff covers instants, civil dates and times, zoned datetimes, offsets and
//! durations. The assertion adapters additionally need a yearless month/day
//! pair and two kinds of range, which live here:
//!
//! - [`AnnualDate`] - a month and day that recurs every year
//! - [`DateInterval`] - an inclusive range of civil dates
//! - [`Interval`] - a half-open range of instants with optional bounds

mod annual_date;
mod date_interval;
mod interval;

pub use annual_date::AnnualDate;
pub use date_interval::{Calendar, DateInterval};
pub use interval::Interval;
