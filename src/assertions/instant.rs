use jiff::Timestamp;

use super::Assertions;
use crate::scope::AssertionScope;

/// Assertions on a [`Timestamp`].
///
/// Instants use the shared equality, the point-in-time ordering and
/// [`be_close_to`](Assertions::be_close_to).
pub type InstantAssertions<'s> = Assertions<'s, Timestamp>;

/// Begin asserting on an instant in the global scope.
///
/// # Example
///
/// ```rust
/// use jiff::{SignedDuration, Timestamp};
/// use jiff_assertions::assert_instant;
///
/// let issued = Timestamp::from_second(1_700_000_000).unwrap();
/// let expires = issued.checked_add(SignedDuration::from_hours(1)).unwrap();
///
/// assert_instant(expires)
///     .be_after(issued, "tokens expire after they are issued")
///     .and()
///     .not_be_close_to(issued, SignedDuration::from_mins(59), "");
/// ```
pub fn assert_instant(subject: impl Into<Option<Timestamp>>) -> InstantAssertions<'static> {
    AssertionScope::global().that(subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn ts(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    #[test]
    fn test_equality() {
        assert_instant(ts(10)).be(ts(10), "").and().not_be(ts(11), "");
        assert_instant(None).be(None, "");
    }

    #[test]
    #[should_panic(expected = "Expected instant to be 1970-01-01T00:00:10Z, but found <null>.")]
    fn test_null_subject() {
        assert_instant(None).be(ts(10), "");
    }

    #[test]
    #[should_panic(expected = "Did not expect instant to be 1970-01-01T00:00:10Z because ids are unique.")]
    fn test_not_be_failure() {
        assert_instant(ts(10)).not_be(ts(10), "ids are unique");
    }

    #[test]
    fn test_ordering() {
        assert_instant(ts(10))
            .be_after(ts(9), "")
            .and()
            .be_before(ts(11), "")
            .and()
            .be_on_or_after(ts(10), "")
            .and()
            .be_on_or_before(ts(10), "");
    }

    #[test]
    #[should_panic(expected = "Expected instant to be before 1970-01-01T00:00:09Z, but found 1970-01-01T00:00:10Z.")]
    fn test_be_before_failure() {
        assert_instant(ts(10)).be_before(ts(9), "");
    }

    #[test]
    fn test_close_to() {
        let precision = SignedDuration::from_secs(2);
        assert_instant(ts(10))
            .be_close_to(ts(12), precision, "")
            .and()
            .be_close_to(ts(8), precision, "")
            .and()
            .not_be_close_to(ts(13), precision, "");
    }
}
