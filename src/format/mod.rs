//! Rendering of temporal values inside failure messages.
//!
//! Every type an adapter asserts on implements [`Temporal`], which names the
//! type in messages and registers how its values are rendered. Formatters
//! live in a [`FormatterRegistry`] owned by an
//! [`AssertionScope`](crate::scope::AssertionScope); the registry is filled
//! once when the scope is built and only read afterwards.
//!
//! # Example
//!
//! ```rust
//! use jiff::Timestamp;
//! use jiff_assertions::format::FormatterRegistry;
//!
//! let mut registry = FormatterRegistry::with_defaults();
//! registry.replace::<Timestamp>(|ts| format!("@{}", ts.as_second()));
//!
//! let epoch = Timestamp::UNIX_EPOCH;
//! assert_eq!(registry.format(&epoch), "@0");
//! assert_eq!(registry.format_option::<Timestamp>(None), "<null>");
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::Offset;
use jiff::{SignedDuration, Timestamp, Zoned};

use crate::value::{AnnualDate, DateInterval, Interval};

/// Text rendered in place of an absent value.
pub const NULL: &str = "<null>";

type FormatFn = Box<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>;

/// A temporal value type that assertion adapters can be built over.
pub trait Temporal: fmt::Display + fmt::Debug + PartialEq + Any {
    /// How the type is named in failure messages, e.g. `"instant"`.
    const NAME: &'static str;

    /// Register this type's formatter. Called once per registry.
    fn register_formatter(registry: &mut FormatterRegistry)
    where
        Self: Sized,
    {
        registry.register::<Self>(|value| value.to_string());
    }
}

/// Formatters for temporal values, keyed by type.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: HashMap<TypeId, FormatFn>,
}

impl FormatterRegistry {
    /// Create an empty registry. Unregistered types render with `Display`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding a formatter for every built-in adapter type.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        AnnualDate::register_formatter(&mut registry);
        DateInterval::register_formatter(&mut registry);
        Interval::register_formatter(&mut registry);
        SignedDuration::register_formatter(&mut registry);
        Timestamp::register_formatter(&mut registry);
        Offset::register_formatter(&mut registry);
        Date::register_formatter(&mut registry);
        DateTime::register_formatter(&mut registry);
        Time::register_formatter(&mut registry);
        Zoned::register_formatter(&mut registry);
        registry
    }

    /// Register a formatter for `T` unless one is already present.
    ///
    /// Returns `true` if the formatter was added.
    pub fn register<T: Any>(&mut self, format: impl Fn(&T) -> String + Send + Sync + 'static) -> bool {
        let id = TypeId::of::<T>();
        if self.formatters.contains_key(&id) {
            return false;
        }
        trace!("registering formatter for {}", std::any::type_name::<T>());
        self.formatters.insert(id, erase(format));
        true
    }

    /// Register a formatter for `T`, overriding any existing one.
    pub fn replace<T: Any>(&mut self, format: impl Fn(&T) -> String + Send + Sync + 'static) {
        self.formatters.insert(TypeId::of::<T>(), erase(format));
    }

    /// Whether a formatter for `T` is registered.
    #[must_use]
    pub fn is_registered<T: Any>(&self) -> bool {
        self.formatters.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered formatters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    /// Whether no formatter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    /// Render a value.
    #[must_use]
    pub fn format<T: Temporal>(&self, value: &T) -> String {
        self.formatters
            .get(&TypeId::of::<T>())
            .and_then(|format| format(value as &dyn Any))
            .unwrap_or_else(|| value.to_string())
    }

    /// Render an optional value, using [`NULL`] when absent.
    #[must_use]
    pub fn format_option<T: Temporal>(&self, value: Option<&T>) -> String {
        value.map_or_else(|| NULL.to_string(), |v| self.format(v))
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.formatters.len())
            .finish()
    }
}

fn erase<T: Any>(format: impl Fn(&T) -> String + Send + Sync + 'static) -> FormatFn {
    Box::new(move |value: &dyn Any| value.downcast_ref::<T>().map(&format))
}

impl Temporal for AnnualDate {
    const NAME: &'static str = "annual date";
}

impl Temporal for DateInterval {
    const NAME: &'static str = "date interval";
}

impl Temporal for Interval {
    const NAME: &'static str = "interval";
}

impl Temporal for SignedDuration {
    const NAME: &'static str = "duration";

    // Friendly units ("1h 30m") read better in messages than ISO 8601.
    fn register_formatter(registry: &mut FormatterRegistry) {
        registry.register::<Self>(|d| format!("{d:#}"));
    }
}

impl Temporal for Timestamp {
    const NAME: &'static str = "instant";
}

impl Temporal for Offset {
    const NAME: &'static str = "offset";
}

impl Temporal for Date {
    const NAME: &'static str = "date";
}

impl Temporal for DateTime {
    const NAME: &'static str = "date and time";
}

impl Temporal for Time {
    const NAME: &'static str = "time";
}

impl Temporal for Zoned {
    const NAME: &'static str = "zoned date and time";
}
