//! Assertion scopes: where failures go and how values are rendered.
//!
//! Every adapter reports through an [`AssertionScope`]. The process-wide
//! [`AssertionScope::global`] scope panics on the first failure, which is
//! what a test usually wants. A collecting scope instead records every
//! failure so several assertions can be checked together:
//!
//! ```rust
//! use jiff::SignedDuration;
//! use jiff_assertions::scope::AssertionScope;
//!
//! let scope = AssertionScope::collecting();
//! scope.that(SignedDuration::from_secs(5)).be_negative("");
//! scope.that(SignedDuration::from_secs(5)).be_zero("it was reset");
//!
//! let failures = scope.take_failures();
//! assert_eq!(failures.len(), 2);
//! assert!(failures[1].contains("because it was reset"));
//! ```
//!
//! A collecting scope that still holds failures when dropped panics with
//! all of them, so failures cannot be lost by forgetting to check.

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::assertions::Assertions;
use crate::error::{Error, Result};
use crate::format::{FormatterRegistry, Temporal};

/// What a scope does with a failed assertion.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FailureStrategy {
    /// Panic immediately with the failure message.
    #[default]
    Panic,
    /// Record the failure and carry on.
    Collect,
}

/// The context assertions evaluate in.
pub struct AssertionScope {
    formatters: FormatterRegistry,
    strategy: FailureStrategy,
    failures: Mutex<Vec<String>>,
}

impl AssertionScope {
    /// Create a panicking scope with the default formatters.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a scope that records failures instead of panicking.
    #[must_use]
    pub fn collecting() -> Self {
        Self::builder().strategy(FailureStrategy::Collect).build()
    }

    /// Start configuring a scope.
    #[must_use]
    pub fn builder() -> AssertionScopeBuilder {
        AssertionScopeBuilder::default()
    }

    /// The shared panicking scope used by the `assert_*` entry points.
    ///
    /// Initialised on first use and never modified afterwards.
    pub fn global() -> &'static AssertionScope {
        static GLOBAL: OnceLock<AssertionScope> = OnceLock::new();
        GLOBAL.get_or_init(AssertionScope::new)
    }

    /// Begin asserting on `subject` within this scope.
    ///
    /// A bare value fixes `T`. An `Option` does not, since `T` could be the
    /// option itself, so name the type: `scope.that::<Timestamp>(maybe)`.
    pub fn that<T: Temporal>(&self, subject: impl Into<Option<T>>) -> Assertions<'_, T> {
        Assertions::new(subject.into(), self)
    }

    /// The configured failure strategy.
    #[must_use]
    pub fn strategy(&self) -> FailureStrategy {
        self.strategy
    }

    /// The formatters used to render values.
    #[must_use]
    pub fn formatters(&self) -> &FormatterRegistry {
        &self.formatters
    }

    /// Whether any failure has been recorded.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.lock().is_empty()
    }

    /// A copy of the recorded failure messages.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    /// Remove and return the recorded failure messages.
    pub fn take_failures(&self) -> Vec<String> {
        std::mem::take(&mut *self.failures.lock())
    }

    /// Consume the scope, turning recorded failures into an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssertionFailed`] holding every message, one per
    /// line, if any assertion failed.
    pub fn into_result(self) -> Result<()> {
        let failures = self.take_failures();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::assertion_failed(failures.join("\n")))
        }
    }

    /// Panic with every recorded failure, if there are any.
    ///
    /// # Panics
    ///
    /// Panics if at least one assertion failed in this scope.
    pub fn assert_all(&self) {
        let failures = self.take_failures();
        if !failures.is_empty() {
            panic!("{}", failures.join("\n"));
        }
    }

    /// Evaluate a condition, reporting `message` when it does not hold.
    pub(crate) fn check(&self, condition: bool, message: impl FnOnce() -> String) -> bool {
        if condition {
            trace!("assertion passed");
            return true;
        }
        self.fail(message());
        false
    }

    pub(crate) fn fail(&self, message: String) {
        debug!("assertion failed: {message}");
        match self.strategy {
            FailureStrategy::Panic => panic!("{message}"),
            FailureStrategy::Collect => self.failures.lock().push(message),
        }
    }
}

impl Default for AssertionScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AssertionScope {
    fn drop(&mut self) {
        let failures = std::mem::take(self.failures.get_mut());
        if !failures.is_empty() && !std::thread::panicking() {
            panic!("{}", failures.join("\n"));
        }
    }
}

impl fmt::Debug for AssertionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionScope")
            .field("strategy", &self.strategy)
            .field("formatters", &self.formatters)
            .field("failures", &self.failures.lock().len())
            .finish()
    }
}

/// Builder for [`AssertionScope`].
///
/// # Example
///
/// ```rust
/// use jiff::civil::{date, Date};
/// use jiff_assertions::scope::{AssertionScope, FailureStrategy};
///
/// let scope = AssertionScope::builder()
///     .strategy(FailureStrategy::Collect)
///     .formatter::<Date>(|d| d.strftime("%d %b %Y").to_string())
///     .build();
///
/// scope.that(date(2024, 3, 1)).be(date(2024, 3, 2), "");
/// assert_eq!(
///     scope.take_failures(),
///     vec!["Expected date to be 02 Mar 2024, but found 01 Mar 2024.".to_string()],
/// );
/// ```
#[derive(Debug)]
pub struct AssertionScopeBuilder {
    strategy: FailureStrategy,
    formatters: FormatterRegistry,
}

impl Default for AssertionScopeBuilder {
    fn default() -> Self {
        Self {
            strategy: FailureStrategy::default(),
            formatters: FormatterRegistry::with_defaults(),
        }
    }
}

impl AssertionScopeBuilder {
    /// Set the failure strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: FailureStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Render values of `T` with `format` instead of the default.
    #[must_use]
    pub fn formatter<T: Temporal>(
        mut self,
        format: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatters.replace::<T>(format);
        self
    }

    /// Build the scope. The formatters are fixed from here on.
    #[must_use]
    pub fn build(self) -> AssertionScope {
        AssertionScope {
            formatters: self.formatters,
            strategy: self.strategy,
            failures: Mutex::new(Vec::new()),
        }
    }
}

/// Render a "because" clause for a failure message.
///
/// Blank reasons render as nothing. A reason that already starts with
/// "because" gets only a leading space.
pub(crate) fn reason(because: &dyn fmt::Display) -> String {
    let text = because.to_string();
    let text = text.trim();
    if text.is_empty() {
        String::new()
    } else if text == "because" || text.starts_with("because ") {
        format!(" {text}")
    } else {
        format!(" because {text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use jiff::Timestamp;

    #[test]
    fn test_reason_rendering() {
        assert_eq!(reason(&""), "");
        assert_eq!(reason(&"   "), "");
        assert_eq!(reason(&"it is cached"), " because it is cached");
        assert_eq!(reason(&"because it is cached"), " because it is cached");
        assert_eq!(reason(&"becausewhatever"), " because becausewhatever");
        assert_eq!(reason(&"because"), " because");
        assert_eq!(
            reason(&format_args!("{} retries", 3)),
            " because 3 retries"
        );
    }

    #[test]
    fn test_collecting_scope_records_failures() {
        let scope = AssertionScope::collecting();
        assert_eq!(scope.strategy(), FailureStrategy::Collect);
        assert!(!scope.check(false, || "first".to_string()));
        assert!(scope.check(true, || "never".to_string()));
        assert!(!scope.check(false, || "second".to_string()));
        assert!(scope.has_failures());
        assert_eq!(scope.failures(), vec!["first", "second"]);
        assert_eq!(scope.take_failures(), vec!["first", "second"]);
        assert!(!scope.has_failures());
    }

    #[test]
    fn test_into_result() {
        let scope = AssertionScope::collecting();
        scope.fail("one".to_string());
        scope.fail("two".to_string());
        assert_eq!(
            scope.into_result(),
            Err(Error::AssertionFailed("one\ntwo".to_string()))
        );
        assert_eq!(AssertionScope::collecting().into_result(), Ok(()));
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panicking_scope() {
        AssertionScope::new().fail("boom".to_string());
    }

    #[test]
    #[should_panic(expected = "forgotten")]
    fn test_drop_reports_unchecked_failures() {
        let scope = AssertionScope::collecting();
        scope.fail("forgotten".to_string());
    }

    #[test]
    #[should_panic(expected = "a\nb")]
    fn test_assert_all() {
        let scope = AssertionScope::collecting();
        scope.fail("a".to_string());
        scope.fail("b".to_string());
        scope.assert_all();
    }

    #[test]
    fn test_global_is_shared() {
        let a = AssertionScope::global();
        let b = AssertionScope::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.strategy(), FailureStrategy::Panic);
    }

    #[test]
    fn test_builder_overrides_single_type() {
        let scope = AssertionScope::builder()
            .formatter::<Timestamp>(|ts| format!("@{}", ts.as_second()))
            .build();
        assert_eq!(scope.formatters().format(&Timestamp::UNIX_EPOCH), "@0");
        assert_eq!(scope.formatters().format(&date(2024, 1, 2)), "2024-01-02");
        assert_eq!(scope.formatters().len(), 10);
    }
}
