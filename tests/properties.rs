//! Behaviour every adapter shares, checked through the public API.

use std::panic::{catch_unwind, AssertUnwindSafe};

use jiff::civil::{date, Date};
use jiff::tz::Offset;
use jiff::{SignedDuration, Timestamp};
use jiff_assertions::prelude::*;

fn ts(second: i64) -> Timestamp {
    Timestamp::from_second(second).unwrap()
}

/// Equal values pass `be` and fail `not_be`; unequal values the reverse.
#[test]
fn test_equality_is_complementary() {
    let pairs = [
        (Some(ts(1)), Some(ts(1))),
        (Some(ts(1)), Some(ts(2))),
        (None, Some(ts(1))),
        (Some(ts(1)), None),
        (None, None),
    ];
    for (subject, expected) in pairs {
        let scope = AssertionScope::collecting();
        scope.that::<Timestamp>(subject).be(expected, "");
        let be_failed = scope.take_failures().len() == 1;
        scope.that::<Timestamp>(subject).not_be(expected, "");
        let not_be_failed = scope.take_failures().len() == 1;
        assert_ne!(be_failed, not_be_failed, "{subject:?} vs {expected:?}");
        assert_eq!(be_failed, subject != expected);
    }
}

/// Distance exactly equal to the precision passes; one nanosecond more fails.
#[test]
fn test_close_to_boundary() {
    let precisions = [
        SignedDuration::ZERO,
        SignedDuration::from_nanos(1),
        SignedDuration::from_secs(3),
        SignedDuration::from_hours(24),
    ];
    let epsilon = SignedDuration::from_nanos(1);
    for precision in precisions {
        let base = SignedDuration::from_secs(100);
        let at = base.checked_add(precision).unwrap();
        let beyond = at.checked_add(epsilon).unwrap();

        let scope = AssertionScope::collecting();
        scope.that(base).be_close_to(at, precision, "");
        scope.that(at).be_close_to(base, precision, "");
        scope.that(base).not_be_close_to(beyond, precision, "");
        assert!(!scope.has_failures(), "{precision:?}");

        scope.that(base).be_close_to(beyond, precision, "");
        scope.that(base).not_be_close_to(at, precision, "");
        assert_eq!(scope.take_failures().len(), 2);
    }
}

/// Durations at opposite ends of the range are further apart than any
/// precision, even the largest one.
#[test]
fn test_close_to_at_duration_extremes() {
    let (min, max) = (SignedDuration::MIN, SignedDuration::MAX);
    let scope = AssertionScope::collecting();
    scope.that(min).not_be_close_to(max, max, "");
    scope.that(max).not_be_close_to(min, max, "");
    assert!(!scope.has_failures());

    scope.that(min).be_close_to(max, max, "");
    scope.that(max).be_close_to(min, max, "");
    assert_eq!(scope.take_failures().len(), 2);

    scope.that(max).be_close_to(SignedDuration::ZERO, max, "");
    assert!(!scope.has_failures());
}

/// A negative precision is a contract violation regardless of the values.
#[test]
fn test_negative_precision_is_rejected() {
    let negative = SignedDuration::from_nanos(-1);
    let cases: Vec<Box<dyn Fn(&AssertionScope)>> = vec![
        Box::new(move |s: &AssertionScope| {
            s.that(ts(0)).be_close_to(ts(0), negative, "");
        }),
        Box::new(move |s: &AssertionScope| {
            s.that::<Timestamp>(None).not_be_close_to(ts(0), negative, "");
        }),
        Box::new(move |s: &AssertionScope| {
            s.that(SignedDuration::ZERO).be_close_to(SignedDuration::MAX, negative, "");
        }),
        Box::new(move |s: &AssertionScope| {
            s.that(Offset::UTC).not_be_close_to(Offset::UTC, negative, "");
        }),
    ];
    for case in cases {
        let scope = AssertionScope::collecting();
        let payload = catch_unwind(AssertUnwindSafe(|| case(&scope))).unwrap_err();
        match payload.downcast_ref::<Error>() {
            Some(Error::InvalidArgument { name, .. }) => assert_eq!(*name, "precision"),
            other => panic!("expected an invalid argument error, got {other:?}"),
        }
        assert!(!scope.has_failures());
    }
}

/// Structural checks on an absent subject fail in both polarities.
#[test]
fn test_null_subject_never_passes_structural_checks() {
    let scope = AssertionScope::collecting();
    scope.that::<AnnualDate>(None).have_day(15, "");
    scope.that::<AnnualDate>(None).not_have_month(1, "");
    scope.that::<Interval>(None).have_start("");
    scope.that::<Interval>(None).not_end_at(ts(0), "");
    scope.that::<Interval>(None).contain(ts(0), "");
    scope.that::<DateInterval>(None).have_end(date(2024, 1, 1), "");
    scope.that::<DateInterval>(None).not_contain(date(2024, 1, 1), "");
    scope.that::<DateInterval>(None).have_calendar(Calendar::Iso, "");
    let failures = scope.take_failures();
    assert_eq!(failures.len(), 8);
    for failure in failures {
        assert!(failure.ends_with("but found <null>."), "{failure}");
    }
}

/// The documented annual date example.
#[test]
#[should_panic(expected = "Expected annual date to have day 15, but found <null>.")]
fn test_null_annual_date_have_day() {
    assert_annual_date(None).have_day(15, "");
}

/// For distinct values exactly one strict ordering holds; at equality both
/// inclusive orderings hold.
#[test]
fn test_ordering_is_exclusive_and_exhaustive() {
    let values = [ts(-5), ts(0), ts(7)];
    for a in values {
        for b in values {
            let scope = AssertionScope::collecting();
            scope.that(a).be_after(b, "");
            let after = !scope.has_failures();
            scope.take_failures();
            scope.that(a).be_before(b, "");
            let before = !scope.has_failures();
            scope.take_failures();

            if a == b {
                assert!(!after && !before);
                scope.that(a).be_on_or_after(b, "").and().be_on_or_before(b, "");
                assert!(!scope.has_failures());
            } else {
                assert!(after ^ before);
            }
        }
    }
}

#[test]
fn test_quantity_ordering_is_exclusive() {
    let (small, large) = (SignedDuration::from_secs(1), SignedDuration::from_secs(2));
    let scope = AssertionScope::collecting();
    scope.that(small).be_greater_than(large, "");
    scope.that(small).be_less_than(large, "");
    assert_eq!(scope.take_failures().len(), 1);
}

#[test]
fn test_because_supports_format_arguments() {
    let scope = AssertionScope::collecting();
    let attempts = 3;
    scope
        .that(date(2024, 1, 1))
        .be(date(2024, 1, 2), format_args!("{attempts} retries push the date out"));
    assert_eq!(
        scope.into_result(),
        Err(Error::AssertionFailed(
            "Expected date to be 2024-01-02 because 3 retries push the date out, but found 2024-01-01."
                .to_string()
        ))
    );
}

#[test]
fn test_custom_formatter_applies_to_messages() {
    let scope = AssertionScope::builder()
        .strategy(FailureStrategy::Collect)
        .formatter::<Date>(|d| format!("{}/{}/{}", d.month(), d.day(), d.year()))
        .build();
    scope.that(date(2024, 7, 4)).be_before(date(2024, 1, 1), "");
    assert_eq!(
        scope.take_failures(),
        vec!["Expected date to be before 1/1/2024, but found 7/4/2024."]
    );
}

#[test]
fn test_chaining_across_adapters() {
    let window = Interval::between(ts(0), ts(60)).unwrap();
    let assertions = assert_interval(window);
    let start = assertions.have_start("");
    let first = *start.which().unwrap();
    start.and().have_end("").and().contain(ts(59), "");

    assert_instant(first)
        .be(ts(0), "")
        .and()
        .be_on_or_before(ts(0), "");
}
